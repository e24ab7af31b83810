/// Shared infrastructure concerns
///
/// Implementations shared across multiple bounded contexts (modules).
pub mod catalog_store;
pub mod config;

// Re-exports for convenience
pub use catalog_store::{CatalogSnapshot, CatalogStore};
pub use config::AppConfig;
