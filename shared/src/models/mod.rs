//! Data models
//!
//! Shared between the dashboard client and the settings form.
//! Wire types use camelCase field names, matching the backend JSON.

pub mod business_hours;

// Re-exports
pub use business_hours::*;
