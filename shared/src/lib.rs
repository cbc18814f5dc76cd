//! Shared types for the plate engine
//!
//! Plain data used by the engine and by every consumer of it: menu items,
//! plates and their line items, session commands and events, availability
//! push payloads, and the structured error codes returned to callers.

pub mod error;
pub mod message;
pub mod models;
pub mod plate;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use message::AvailabilityChanged;
pub use models::{MenuItem, RawMenuItem};
pub use plate::{LineItem, Plate, PlateEvent, SessionCommand, SessionSnapshot};
