//! Merchant business hours API
//!
//! `GET /merchants/{id}/business-hours` is decoded into an editable
//! [`BusinessHoursConfig`]; saving validates, encodes and `PUT`s it back.
//! Failures are surfaced verbatim and never retried.

use serde_json::Value;
use shared::{ApiEnvelope, BusinessHoursConfig, hours};

use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientError, ClientResult};

/// Result of a successful save
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Confirmation text from the backend, if any
    pub message: Option<String>,
}

/// Business hours endpoints of one backend
#[derive(Debug, Clone)]
pub struct MerchantHoursClient<C = NetworkHttpClient> {
    http: C,
}

impl MerchantHoursClient<NetworkHttpClient> {
    /// Build a network client from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(NetworkHttpClient::new(config)?))
    }
}

impl<C: HttpClient> MerchantHoursClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &C {
        &self.http
    }

    fn path(merchant_id: &str) -> String {
        format!("merchants/{}/business-hours", merchant_id.trim())
    }

    /// Fetch and decode a merchant's business hours.
    ///
    /// A malformed payload decodes to the default configuration.
    pub async fn fetch(&self, merchant_id: &str) -> ClientResult<BusinessHoursConfig> {
        let resp: ApiEnvelope<Value> = self.http.get(&Self::path(merchant_id)).await?;
        if !resp.success {
            tracing::warn!(merchant_id, message = %resp.failure_message(), "Failed to load business hours");
            return Err(rejected(resp));
        }

        let config = hours::decode_value(&resp.data.unwrap_or(Value::Null));
        tracing::info!(
            merchant_id,
            summary = %hours::describe_availability(&config),
            "Loaded business hours"
        );
        Ok(config)
    }

    /// Validate, encode and save a merchant's business hours
    pub async fn save(
        &self,
        merchant_id: &str,
        config: &BusinessHoursConfig,
    ) -> ClientResult<SaveOutcome> {
        hours::validate(config)?;
        let body = hours::encode(config);

        let resp: ApiEnvelope<Value> = self.http.put(&Self::path(merchant_id), &body).await?;
        if !resp.success {
            tracing::warn!(merchant_id, message = %resp.failure_message(), "Business hours rejected");
            return Err(rejected(resp));
        }

        tracing::info!(
            merchant_id,
            summary = %hours::describe_availability(config),
            "Saved business hours"
        );
        Ok(SaveOutcome {
            message: resp.message,
        })
    }
}

fn rejected(resp: ApiEnvelope<Value>) -> ClientError {
    ClientError::Rejected {
        message: resp.failure_message(),
        errors: resp.errors.unwrap_or_default(),
    }
}
