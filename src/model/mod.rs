// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod item;
pub mod list;

pub use item::{TodoId, TodoItem};
pub use list::{Change, TodoList};
