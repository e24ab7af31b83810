use crate::modules::booking::domain::ScreeningState;
use crate::shared::application::ServiceResponse;

pub const TICKETS_BOUGHT: &str = "Successfully bought tickets!";
pub const SCREENING_IN_PAST: &str = "Screening is in the past!";
pub const SCREENING_NOT_FOUND: &str = "Screening does not exist!";

/// Result of a ticket purchase (`data` mirrors `success`)
pub type BuyTicketsResult = ServiceResponse<bool>;

/// Rejection message for a screening that is not open for sale
pub fn closed_message(state: ScreeningState) -> Option<&'static str> {
    match state {
        ScreeningState::NotFound => Some(SCREENING_NOT_FOUND),
        ScreeningState::Past => Some(SCREENING_IN_PAST),
        ScreeningState::Open => None,
    }
}
