//! Unified error system for the plate engine
//!
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error with code, message and structured details
//!
//! # Error Code Ranges
//!
//! - 4xxx: Plate and cart errors
//! - 5xxx: Checkout errors
//! - 6xxx: Menu errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::PortionLimitExceeded)
//!     .with_detail("cap", 3)
//!     .with_detail("plate_number", 1);
//! assert_eq!(err.code.code(), 4004);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
