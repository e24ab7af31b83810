use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::booking::domain::{ScreeningRepository, ScreeningState, Ticket, TicketRepository};
use crate::shared::{
    application::use_case::UseCase,
    domain::Clock,
    errors::{AppError, AppResult},
    utils::{LogContext, Validator},
};

use super::command::BuyTicketsCommand;
use super::result::{closed_message, BuyTicketsResult, TICKETS_BOUGHT};

/// Use case handler for ticket purchases.
///
/// A sale is legal while the screening's scheduled time is not before "now".
/// Quantity is recorded as requested; there is no seat limit.
pub struct BuyTicketsHandler {
    screening_repository: Arc<dyn ScreeningRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
    clock: Arc<dyn Clock>,
}

impl BuyTicketsHandler {
    pub fn new(
        screening_repository: Arc<dyn ScreeningRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            screening_repository,
            ticket_repository,
            clock,
        }
    }
}

#[async_trait]
impl UseCase<BuyTicketsCommand, BuyTicketsResult> for BuyTicketsHandler {
    async fn execute(&self, command: BuyTicketsCommand) -> AppResult<BuyTicketsResult> {
        let now = self.clock.now();
        let screening = self
            .screening_repository
            .find_by_id(command.screening_id)
            .await?;

        let state = ScreeningState::evaluate(screening.as_ref(), now);
        if let Some(message) = closed_message(state) {
            LogContext::rejected("Buy tickets", message);
            return Ok(BuyTicketsResult::rejected(message));
        }

        match Validator::validate_ticket_quantity(command.quantity) {
            Ok(()) => {}
            Err(AppError::ValidationError(reason)) => {
                LogContext::rejected("Buy tickets", &reason);
                return Ok(BuyTicketsResult::rejected(reason));
            }
            Err(other) => return Err(other),
        }

        let ticket = Ticket::new(command.screening_id, command.caller_id, command.quantity, now);
        self.ticket_repository.save(&ticket).await?;

        LogContext::committed(
            "Buy tickets",
            &format!(
                "{} ticket(s) for screening {} by user {}",
                ticket.quantity, ticket.screening_id, ticket.user_id
            ),
        );
        Ok(BuyTicketsResult::accepted(TICKETS_BOUGHT))
    }
}
