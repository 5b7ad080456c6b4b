//! Error system for the merchant dashboard
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Merchant errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::InvalidFormat, "Invalid start time '9am'")
//!     .with_detail("field", "start")
//!     .with_detail("index", 0);
//! assert_eq!(err.code.to_string(), "E0006");
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
