use uuid::Uuid;

/// Query for an item's average rating
#[derive(Debug, Clone, Copy)]
pub struct GetAverageRatingQuery {
    pub item_id: Uuid,
}

impl GetAverageRatingQuery {
    pub fn new(item_id: Uuid) -> Self {
        Self { item_id }
    }
}
