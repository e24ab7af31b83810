pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::IdentityProvider;
pub use domain::{CallerIdentity, User, UserRepository};
pub use infrastructure::{ClaimsIdentityProvider, StaticIdentityProvider, UserRepositoryImpl};
