//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Plate and cart errors (4xxx)
    Plate,
    /// Checkout errors (5xxx)
    Checkout,
    /// Menu errors (6xxx)
    Menu,
}

impl ErrorCategory {
    /// Determine category from error code value; `None` for unassigned codes
    pub fn from_code(code: u16) -> Option<Self> {
        ErrorCode::try_from(code).ok().map(|c| c.category())
    }
}

impl ErrorCode {
    /// Get the category of this error code
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::PlateEmpty
            | ErrorCode::PortionLimitExceeded
            | ErrorCode::InvalidPortions
            | ErrorCode::NavigationBlocked
            | ErrorCode::DuplicatePlate => ErrorCategory::Plate,
            ErrorCode::UnavailableItemsInCart
            | ErrorCode::CheckoutRejected
            | ErrorCode::CartEmpty => ErrorCategory::Checkout,
            ErrorCode::ItemUnavailable
            | ErrorCode::InvalidMenuItem
            | ErrorCode::MenuItemNotFound => ErrorCategory::Menu,
        }
    }
}
