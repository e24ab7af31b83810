use crate::modules::catalog::application::dto::ItemSummary;

/// Matching items in store order
pub type SearchItemsResult = Vec<ItemSummary>;
