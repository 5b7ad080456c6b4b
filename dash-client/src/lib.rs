//! Dashboard client - HTTP client for the marketplace backend
//!
//! Thin async wrappers around the merchant endpoints used by the admin
//! dashboard. Payload conversion lives in [`shared::hours`].

pub mod config;
pub mod error;
pub mod http;
pub mod merchant;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use merchant::{MerchantHoursClient, SaveOutcome};

// Re-export shared types for convenience
pub use shared::{ApiEnvelope, BusinessHoursConfig};
