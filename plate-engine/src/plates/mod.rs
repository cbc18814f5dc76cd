//! Plate composition engine
//!
//! - [`builder`] - the single in-progress plate, auto-split on overflow
//! - [`ledger`] - committed plates in checkout order
//! - [`session`] - builder + cart + the editing bridge between them
//! - [`reconciler`] - availability flags and bulk removal
//! - [`actions`] - `SessionCommand` dispatch
//! - [`checkout`] / [`availability`] - async boundaries

pub mod capacity;
pub mod error;
pub mod traits;

pub mod actions;
pub mod availability;
pub mod builder;
pub mod checkout;
pub mod ledger;
pub mod reconciler;
pub mod session;

pub use actions::{SessionAction, dispatch};
pub use builder::{AddOutcome, BuilderUpdate, PlateBuilder, RemoveOutcome, SplitInfo};
pub use checkout::{CheckoutGateway, CheckoutReceipt, CheckoutRequest, CheckoutResult, checkout_cart};
pub use error::{PlateError, PlateResult};
pub use ledger::{CartLedger, LedgerUpdate};
pub use reconciler::{AvailabilityReconciler, DestroyedPlate, RemovalReport};
pub use session::{
    CancelOutcome, CommitOutcome, EditOutcome, NavigationOutcome, SessionAdd, SharedSession,
    StorefrontSession,
};
pub use traits::{CommandContext, CommandHandler};
