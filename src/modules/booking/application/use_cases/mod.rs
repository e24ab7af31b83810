pub mod buy_tickets;

pub use buy_tickets::{BuyTicketsCommand, BuyTicketsHandler, BuyTicketsResult};
