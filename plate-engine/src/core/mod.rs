//! Core engine infrastructure

pub mod config;

pub use config::{AbandonedEditPolicy, EngineConfig};
