use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::booking::domain::{Screening, ScreeningRepository};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::CatalogStore;

pub struct ScreeningRepositoryImpl {
    store: Arc<CatalogStore>,
}

impl ScreeningRepositoryImpl {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ScreeningRepository for ScreeningRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Screening>> {
        Ok(self.store.read(|state| state.screening(id).cloned()).await)
    }

    async fn find_by_item(&self, item_id: Uuid) -> AppResult<Vec<Screening>> {
        Ok(self
            .store
            .read(|state| {
                state
                    .screenings
                    .iter()
                    .filter(|s| s.item_id == item_id)
                    .cloned()
                    .collect()
            })
            .await)
    }
}
