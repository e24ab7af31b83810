pub mod item;

pub use item::{Actor, Item};
