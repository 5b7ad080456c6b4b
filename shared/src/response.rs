//! API Response types
//!
//! Envelope used by the marketplace backend for every dashboard endpoint:
//! ```json
//! {
//!     "success": false,
//!     "message": "Validation failed",
//!     "errors": ["maxOrders must be positive"]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Backend response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiEnvelope<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
        }
    }

    /// Create a failed response
    pub fn failure(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: if errors.is_empty() { None } else { Some(errors) },
        }
    }

    /// Text to show the user when `success` is false: the `errors` list
    /// verbatim, else `message`, else a generic fallback.
    pub fn failure_message(&self) -> String {
        match (&self.errors, &self.message) {
            (Some(errors), _) if !errors.is_empty() => errors.join("; "),
            (_, Some(message)) if !message.is_empty() => message.clone(),
            _ => "Request failed".to_string(),
        }
    }
}
