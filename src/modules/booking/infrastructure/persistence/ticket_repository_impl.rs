use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::booking::domain::{Ticket, TicketRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::CatalogStore;

pub struct TicketRepositoryImpl {
    store: Arc<CatalogStore>,
}

impl TicketRepositoryImpl {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn save(&self, ticket: &Ticket) -> AppResult<()> {
        self.store
            .write(|state| {
                if state.screening(ticket.screening_id).is_none() {
                    return Err(AppError::NotFound(format!(
                        "Screening with id {} not found",
                        ticket.screening_id
                    )));
                }
                state.tickets.push(ticket.clone());
                Ok(())
            })
            .await
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Ticket>> {
        Ok(self
            .store
            .read(|state| {
                state
                    .tickets
                    .iter()
                    .filter(|t| t.user_id == user_id)
                    .cloned()
                    .collect()
            })
            .await)
    }
}
