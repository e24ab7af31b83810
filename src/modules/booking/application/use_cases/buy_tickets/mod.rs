mod command;
mod handler;
mod result;

pub use command::BuyTicketsCommand;
pub use handler::BuyTicketsHandler;
pub use result::{BuyTicketsResult, SCREENING_IN_PAST, SCREENING_NOT_FOUND, TICKETS_BOUGHT};
