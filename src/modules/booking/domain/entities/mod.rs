pub mod screening;
pub mod ticket;

pub use screening::Screening;
pub use ticket::Ticket;
