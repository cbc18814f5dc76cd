//! Push channel message types
//!
//! Payloads consumed from the real-time notification transport. The
//! transport itself lives outside the engine.

pub mod payload;
pub use payload::*;
