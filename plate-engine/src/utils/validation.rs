//! Boundary validation helpers
//!
//! Applied where data enters the engine (catalog ingestion, command payloads),
//! never inside plate logic.

use crate::plates::{PlateError, PlateResult};

/// Menu item ids are used as line keys
pub const MAX_ID_LEN: usize = 128;

/// Display names shown in notifications
pub const MAX_NAME_LEN: usize = 200;

/// Requested portions must be positive and bounded.
pub fn validate_portions(portions: i32, max: i32) -> PlateResult<i32> {
    if portions <= 0 || portions > max {
        return Err(PlateError::InvalidPortions(portions));
    }
    Ok(portions)
}

/// A cart update may also drop a line (0), but never go negative.
pub fn validate_portion_update(portions: i32, max: i32) -> PlateResult<i32> {
    if portions < 0 || portions > max {
        return Err(PlateError::InvalidPortions(portions));
    }
    Ok(portions)
}

/// Reject NaN and infinity before any decimal conversion.
pub fn require_finite(value: f64, field: &str) -> PlateResult<f64> {
    if !value.is_finite() {
        return Err(PlateError::InvalidMenuItem(format!("{field} must be a finite number")));
    }
    Ok(value)
}

/// Price must be finite, non-negative and below the configured ceiling.
pub fn validate_price(price: f64, max: f64) -> PlateResult<f64> {
    require_finite(price, "price")?;
    if price < 0.0 {
        return Err(PlateError::InvalidMenuItem(format!("price must not be negative, got {price}")));
    }
    if price > max {
        return Err(PlateError::InvalidMenuItem(format!("price {price} exceeds maximum {max}")));
    }
    Ok(price)
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> PlateResult<()> {
    if value.trim().is_empty() {
        return Err(PlateError::InvalidMenuItem(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(PlateError::InvalidMenuItem(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}
