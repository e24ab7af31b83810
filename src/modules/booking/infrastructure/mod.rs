pub mod persistence;

pub use persistence::{ScreeningRepositoryImpl, TicketRepositoryImpl};
