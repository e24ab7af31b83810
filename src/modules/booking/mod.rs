pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::BookingService;
pub use domain::{Screening, ScreeningRepository, ScreeningState, Ticket, TicketRepository};
pub use infrastructure::{ScreeningRepositoryImpl, TicketRepositoryImpl};
