//! Unified error codes for the plate engine
//!
//! Error codes are organized by category:
//! - 4xxx: Plate and cart errors
//! - 5xxx: Checkout errors
//! - 6xxx: Menu errors
//!
//! Retired numbers are never reused.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` so UI layers in any language can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 4xxx: Plate ====================
    /// Plate has no items
    PlateEmpty = 4001,
    /// Portion update exceeds the plate's takeaway capacity
    PortionLimitExceeded = 4004,
    /// Portions must be a positive integer
    InvalidPortions = 4005,
    /// Navigation blocked at the first or last plate
    NavigationBlocked = 4006,
    /// Plate id already present in the cart
    DuplicatePlate = 4007,

    // ==================== 5xxx: Checkout ====================
    /// Cart holds items that are no longer available
    UnavailableItemsInCart = 5001,
    /// Checkout collaborator rejected the submission
    CheckoutRejected = 5002,
    /// Cart has no plates
    CartEmpty = 5003,

    // ==================== 6xxx: Menu ====================
    /// Menu item is not available
    ItemUnavailable = 6001,
    /// Menu item record failed validation
    InvalidMenuItem = 6002,
    /// Menu item not found in catalog
    MenuItemNotFound = 6003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // Plate
            ErrorCode::PlateEmpty => "Plate has no items",
            ErrorCode::PortionLimitExceeded => "Plate portion limit reached",
            ErrorCode::InvalidPortions => "Portions must be a positive number",
            ErrorCode::NavigationBlocked => "No plate in that direction",
            ErrorCode::DuplicatePlate => "Plate is already in the cart",

            // Checkout
            ErrorCode::UnavailableItemsInCart => "Cart contains unavailable items",
            ErrorCode::CheckoutRejected => "Checkout was rejected",
            ErrorCode::CartEmpty => "Cart is empty",

            // Menu
            ErrorCode::ItemUnavailable => "Item is not available",
            ErrorCode::InvalidMenuItem => "Invalid menu item",
            ErrorCode::MenuItemNotFound => "Menu item not found",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Plate
            4001 => Ok(ErrorCode::PlateEmpty),
            4004 => Ok(ErrorCode::PortionLimitExceeded),
            4005 => Ok(ErrorCode::InvalidPortions),
            4006 => Ok(ErrorCode::NavigationBlocked),
            4007 => Ok(ErrorCode::DuplicatePlate),

            // Checkout
            5001 => Ok(ErrorCode::UnavailableItemsInCart),
            5002 => Ok(ErrorCode::CheckoutRejected),
            5003 => Ok(ErrorCode::CartEmpty),

            // Menu
            6001 => Ok(ErrorCode::ItemUnavailable),
            6002 => Ok(ErrorCode::InvalidMenuItem),
            6003 => Ok(ErrorCode::MenuItemNotFound),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
