use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::identity::domain::entities::User;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}
