pub mod ports;

pub use ports::IdentityProvider;
