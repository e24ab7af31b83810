use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::domain::{entities::Item, value_objects::ItemType};
use crate::shared::errors::AppResult;

/// Port (interface) for catalog reads.
///
/// Collections are returned in store-iteration order.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find item by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>>;

    /// Check if item exists
    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    /// Every item, ratings included
    async fn find_all(&self) -> AppResult<Vec<Item>>;

    /// Every item of one type
    async fn find_by_type(&self, item_type: ItemType) -> AppResult<Vec<Item>>;
}
