pub mod claims_identity;
pub mod persistence;

pub use claims_identity::{ClaimsIdentityProvider, StaticIdentityProvider};
pub use persistence::UserRepositoryImpl;
