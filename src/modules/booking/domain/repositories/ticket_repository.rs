use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::booking::domain::entities::Ticket;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Persist a new ticket. Fails if its screening no longer exists.
    async fn save(&self, ticket: &Ticket) -> AppResult<()>;

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Ticket>>;
}
