//! Plate Engine - capacity-constrained plate composition for a takeaway storefront
//!
//! # Overview
//!
//! Customers build one plate at a time. Takeaway items share a per-plate
//! portion cap; an add that would overflow it seals the plate into the cart
//! and starts a new one. Committed plates can be pulled back out of the cart
//! for editing and return to the same cart position.
//!
//! # Module layout
//!
//! ```text
//! plate-engine/src/
//! ├── core/          # configuration
//! ├── catalog/       # menu catalog, boundary normalization
//! ├── plate_money/   # decimal totals
//! ├── plates/        # builder, cart, session, commands, async boundaries
//! └── utils/         # logging, validation
//! ```

pub mod catalog;
pub mod core;
pub mod plate_money;
pub mod plates;
pub mod utils;

pub use catalog::{InMemoryCatalog, MenuCatalog};
pub use core::{AbandonedEditPolicy, EngineConfig};
pub use plates::{
    CheckoutGateway, CheckoutResult, PlateError, PlateResult, SharedSession, StorefrontSession,
};
pub use utils::logger::{init_logger, init_logger_with_file};
