//! Session snapshot - what the UI renders

use super::types::{Plate, UnavailableLine};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read-only view of one customer's session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    /// The builder's in-progress plate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_plate: Option<Plate>,
    /// Id of the committed plate currently pulled back for editing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing_plate_id: Option<String>,
    /// Committed plates in checkout order
    pub cart: Vec<Plate>,
    /// Sum over the cart only
    pub cart_total: Decimal,
    /// Total of the in-progress plate
    pub current_plate_total: Decimal,
    /// Number of committed plates
    pub plate_count: usize,
    /// Index of the on-screen plate among all navigable plates
    pub view_index: usize,
    pub view_count: usize,
    /// Lines flagged unavailable across builder and cart
    pub unavailable: Vec<UnavailableLine>,
}

impl SessionSnapshot {
    /// Checkout must block while any line is flagged unavailable
    pub fn can_checkout(&self) -> bool {
        !self.cart.is_empty() && self.unavailable.is_empty()
    }
}
