use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::identity::domain::{User, UserRepository};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::CatalogStore;

pub struct UserRepositoryImpl {
    store: Arc<CatalogStore>,
}

impl UserRepositoryImpl {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.store.read(|state| state.user(id).cloned()).await)
    }
}
