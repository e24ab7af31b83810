use crate::modules::catalog::application::dto::ItemSummary;
use crate::shared::application::pagination::PaginatedResult;

/// Result of listing items (uses PaginatedResult from shared)
pub type ListItemsResult = PaginatedResult<ItemSummary>;
