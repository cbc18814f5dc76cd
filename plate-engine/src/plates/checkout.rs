//! Cart checkout against an external payment collaborator
//!
//! The session lock is held only to validate and snapshot the cart, and
//! again to settle the result. It is never held across the gateway call.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::error::{PlateError, PlateResult};
use super::session::SharedSession;
use shared::plate::{Plate, PlateEvent, PlateLocation};

/// Cart contents submitted for payment
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub plates: Vec<Plate>,
    pub total: Decimal,
}

impl CheckoutRequest {
    pub fn plate_ids(&self) -> Vec<String> {
        self.plates.iter().map(|p| p.id.clone()).collect()
    }
}

/// Opaque gateway verdict
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutResult {
    Accepted { reference: String },
    Declined { reason: String },
}

/// External order/payment collaborator
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn submit(&self, request: CheckoutRequest) -> CheckoutResult;
}

/// What an accepted checkout settled
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    pub plate_ids: Vec<String>,
    pub total: Decimal,
    pub reference: String,
}

impl CheckoutReceipt {
    pub fn to_event(&self) -> PlateEvent {
        PlateEvent::CheckoutCompleted {
            plate_ids: self.plate_ids.clone(),
            total: self.total,
            reference: self.reference.clone(),
        }
    }
}

/// Submit the cart and, once accepted, remove exactly the submitted plates.
///
/// Blocks while any cart line is flagged unavailable. Plates committed while
/// the gateway call is in flight stay in the cart. A submitted plate pulled
/// into the builder meanwhile is settled there too. A declined checkout
/// leaves the cart unchanged.
pub async fn checkout_cart(
    session: &SharedSession,
    gateway: &dyn CheckoutGateway,
) -> PlateResult<CheckoutReceipt> {
    let request = {
        let guard = session.lock();
        if guard.ledger().is_empty() {
            return Err(PlateError::CartEmpty);
        }
        let count = guard
            .unavailable_items()
            .iter()
            .filter(|line| line.location == PlateLocation::Cart)
            .count();
        if count > 0 {
            return Err(PlateError::UnavailableItemsInCart { count });
        }
        CheckoutRequest {
            plates: guard.ledger().plates().to_vec(),
            total: guard.cart_total(),
        }
    };

    let plate_ids = request.plate_ids();
    let total = request.total;
    tracing::info!(plates = plate_ids.len(), %total, "Checkout submitted");

    match gateway.submit(request).await {
        CheckoutResult::Accepted { reference } => {
            let removed = session.lock().settle_checkout(&plate_ids).len();
            if removed != plate_ids.len() {
                tracing::warn!(
                    submitted = plate_ids.len(),
                    removed,
                    "Cart changed during checkout"
                );
            }
            tracing::info!(%reference, %total, "Checkout accepted");
            Ok(CheckoutReceipt {
                plate_ids,
                total,
                reference,
            })
        }
        CheckoutResult::Declined { reason } => {
            tracing::warn!(%reason, "Checkout declined");
            Err(PlateError::CheckoutRejected(reason))
        }
    }
}
