pub mod service;
pub mod use_cases;

// Re-export commonly used types
pub use service::BookingService;
pub use use_cases::{BuyTicketsCommand, BuyTicketsHandler, BuyTicketsResult};
