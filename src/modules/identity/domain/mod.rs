pub mod entities;
pub mod repositories;

pub use entities::{CallerIdentity, User};
pub use repositories::UserRepository;
