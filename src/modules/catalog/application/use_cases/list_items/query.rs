use crate::modules::catalog::domain::ItemType;
use crate::shared::application::pagination::PaginationParams;

/// Query for one page of top-rated items of a type
#[derive(Debug, Clone)]
pub struct ListItemsQuery {
    pub item_type: ItemType,
    pub pagination: PaginationParams,
}

impl ListItemsQuery {
    pub fn new(item_type: ItemType, pagination: PaginationParams) -> Self {
        Self {
            item_type,
            pagination,
        }
    }
}
