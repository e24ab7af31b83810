pub mod screening_repository;
pub mod ticket_repository;

pub use screening_repository::ScreeningRepository;
pub use ticket_repository::TicketRepository;
