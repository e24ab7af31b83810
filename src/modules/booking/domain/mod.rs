pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Screening, Ticket};
pub use repositories::{ScreeningRepository, TicketRepository};
pub use value_objects::ScreeningState;
