pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Actor, Item};
pub use repositories::ItemRepository;
pub use value_objects::{ItemType, SearchFilter};
