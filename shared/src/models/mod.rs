//! Data models
//!
//! Menu records as supplied by the catalog collaborator.

pub mod menu_item;

// Re-exports
pub use menu_item::*;
