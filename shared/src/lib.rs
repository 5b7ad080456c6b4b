//! Shared types for the merchant dashboard
//!
//! Business hours models and codec, error types and response envelopes
//! used by the dashboard client and its callers.

pub mod error;
pub mod hours;
pub mod models;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use hours::{decode, describe_availability, encode, validate};
pub use models::{BusinessHoursConfig, BusinessHoursData, BusinessHoursWire};
pub use response::ApiEnvelope;
