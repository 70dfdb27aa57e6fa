//! Data models
//!
//! Persisted as JSON in the key-value store and handed to the presentation layer.
//! All IDs are `i64` (snowflake ids, safe as JavaScript numbers).

pub mod dish;
pub mod menu;
pub mod order;

// Re-exports
pub use dish::*;
pub use menu::*;
pub use order::*;
