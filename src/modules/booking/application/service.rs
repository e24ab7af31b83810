use std::sync::Arc;
use uuid::Uuid;

use crate::modules::booking::domain::{Screening, ScreeningRepository, Ticket, TicketRepository};
use crate::modules::identity::IdentityProvider;
use crate::shared::{application::UseCase, domain::Clock, errors::AppResult};
use crate::log_debug;

use super::use_cases::{BuyTicketsCommand, BuyTicketsHandler, BuyTicketsResult};

/// Entry point for booking requests
pub struct BookingService {
    identity: Arc<dyn IdentityProvider>,
    screening_repository: Arc<dyn ScreeningRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
    buy_tickets: BuyTicketsHandler,
}

impl BookingService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        screening_repository: Arc<dyn ScreeningRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            identity,
            buy_tickets: BuyTicketsHandler::new(
                screening_repository.clone(),
                ticket_repository.clone(),
                clock,
            ),
            screening_repository,
            ticket_repository,
        }
    }

    /// Buy `quantity` tickets for a screening as the current caller
    pub async fn buy_tickets(&self, screening_id: Uuid, quantity: u32) -> AppResult<BuyTicketsResult> {
        let caller = self.identity.current_caller().await?;
        log_debug!(
            "User {} buying {} ticket(s) for screening {}",
            caller.username,
            quantity,
            screening_id
        );

        self.buy_tickets
            .execute(BuyTicketsCommand::new(screening_id, quantity, caller.user_id))
            .await
    }

    pub async fn screenings_for_item(&self, item_id: Uuid) -> AppResult<Vec<Screening>> {
        self.screening_repository.find_by_item(item_id).await
    }

    /// Tickets bought by the current caller
    pub async fn my_tickets(&self) -> AppResult<Vec<Ticket>> {
        let caller = self.identity.current_caller().await?;
        self.ticket_repository.find_by_user(caller.user_id).await
    }
}
