mod screening_repository_impl;
mod ticket_repository_impl;

pub use screening_repository_impl::ScreeningRepositoryImpl;
pub use ticket_repository_impl::TicketRepositoryImpl;
