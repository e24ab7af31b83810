use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::booking::domain::entities::Screening;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait ScreeningRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Screening>>;

    /// Screenings of one item, in store order
    async fn find_by_item(&self, item_id: Uuid) -> AppResult<Vec<Screening>>;
}
