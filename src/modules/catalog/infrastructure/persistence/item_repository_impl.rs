use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::domain::{Item, ItemRepository, ItemType};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::CatalogStore;

pub struct ItemRepositoryImpl {
    store: Arc<CatalogStore>,
}

impl ItemRepositoryImpl {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        Ok(self.store.read(|state| state.item(id).cloned()).await)
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.store.read(|state| state.item(id).is_some()).await)
    }

    async fn find_all(&self) -> AppResult<Vec<Item>> {
        Ok(self.store.read(|state| state.items.clone()).await)
    }

    async fn find_by_type(&self, item_type: ItemType) -> AppResult<Vec<Item>> {
        Ok(self
            .store
            .read(|state| {
                state
                    .items
                    .iter()
                    .filter(|item| item.item_type == item_type)
                    .cloned()
                    .collect()
            })
            .await)
    }
}
