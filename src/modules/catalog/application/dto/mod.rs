pub mod item_summary;

pub use item_summary::ItemSummary;
