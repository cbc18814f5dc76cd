//! Plate engine errors and their mapping to structured [`AppError`]

use shared::error::{AppError, ErrorCode};
use shared::plate::NavigationDirection;
use thiserror::Error;

/// Plate engine errors
///
/// Every rejection leaves session state untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlateError {
    #[error("Item unavailable: {name}")]
    ItemUnavailable { menu_item_id: String, name: String },

    #[error("Plate has no items")]
    EmptyPlate,

    #[error("Plate {plate_number} is limited to {cap} portions ({item_name})")]
    LimitExceeded {
        cap: i32,
        plate_number: u32,
        item_name: String,
    },

    #[error("Invalid portions: {0}")]
    InvalidPortions(i32),

    #[error("Plate already in cart: {0}")]
    DuplicatePlate(String),

    #[error("No plate to navigate to ({0:?})")]
    NavigationBlocked(NavigationDirection),

    #[error("Cart contains {count} unavailable item(s)")]
    UnavailableItemsInCart { count: usize },

    #[error("Cart is empty")]
    CartEmpty,

    #[error("Checkout rejected: {0}")]
    CheckoutRejected(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Invalid menu item: {0}")]
    InvalidMenuItem(String),
}

impl From<PlateError> for AppError {
    fn from(err: PlateError) -> Self {
        let message = err.to_string();
        match err {
            PlateError::ItemUnavailable { menu_item_id, name } => {
                AppError::with_message(ErrorCode::ItemUnavailable, message)
                    .with_detail("menu_item_id", menu_item_id)
                    .with_detail("item_name", name)
            }
            PlateError::EmptyPlate => AppError::with_message(ErrorCode::PlateEmpty, message),
            PlateError::LimitExceeded {
                cap,
                plate_number,
                item_name,
            } => AppError::with_message(ErrorCode::PortionLimitExceeded, message)
                .with_detail("cap", cap)
                .with_detail("plate_number", plate_number)
                .with_detail("item_name", item_name),
            PlateError::InvalidPortions(portions) => {
                AppError::with_message(ErrorCode::InvalidPortions, message)
                    .with_detail("portions", portions)
            }
            PlateError::DuplicatePlate(id) => {
                AppError::with_message(ErrorCode::DuplicatePlate, message).with_detail("plate_id", id)
            }
            PlateError::NavigationBlocked(direction) => {
                let direction = match direction {
                    NavigationDirection::Back => "back",
                    NavigationDirection::Forward => "forward",
                };
                AppError::with_message(ErrorCode::NavigationBlocked, message)
                    .with_detail("direction", direction)
            }
            PlateError::UnavailableItemsInCart { count } => {
                AppError::with_message(ErrorCode::UnavailableItemsInCart, message)
                    .with_detail("count", count)
            }
            PlateError::CartEmpty => AppError::with_message(ErrorCode::CartEmpty, message),
            PlateError::CheckoutRejected(reason) => {
                AppError::with_message(ErrorCode::CheckoutRejected, message)
                    .with_detail("reason", reason)
            }
            PlateError::MenuItemNotFound(id) => {
                AppError::with_message(ErrorCode::MenuItemNotFound, message)
                    .with_detail("menu_item_id", id)
            }
            PlateError::InvalidMenuItem(_) => {
                AppError::with_message(ErrorCode::InvalidMenuItem, message)
            }
        }
    }
}

pub type PlateResult<T> = Result<T, PlateError>;
