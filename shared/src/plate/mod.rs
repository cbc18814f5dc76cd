//! Plate composition types
//!
//! - Types: line items, plates, navigation and location markers
//! - Commands: requests from the UI layer to mutate a session
//! - Events: plain-data signals emitted after a command is processed
//! - Snapshots: what the UI renders

pub mod command;
pub mod event;
pub mod snapshot;
pub mod types;

// Re-exports
pub use command::{PlateRef, SessionCommand};
pub use event::PlateEvent;
pub use snapshot::SessionSnapshot;
pub use types::*;
