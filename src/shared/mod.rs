// Shared Kernel
// Building blocks reused by the catalog, rating, booking and identity modules

pub mod application; // Use case traits, pagination, service responses
pub mod domain; // Clock abstraction
pub mod errors; // Shared error types
pub mod infrastructure; // Configuration and the in-memory catalog store
pub mod utils; // Logging and validation helpers

// Re-exports for convenience
pub use infrastructure::{AppConfig, CatalogStore};
