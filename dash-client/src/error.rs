//! Client error types

use shared::AppError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Backend answered `success: false`; message and errors are verbatim
    #[error("{message}")]
    Rejected {
        message: String,
        errors: Vec<String>,
    },

    /// Configuration failed local validation, nothing was sent
    #[error("{0}")]
    Invalid(#[from] AppError),

    /// Failed status without an envelope body
    #[error("{0}")]
    Server(AppError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Messages to show inline in the form
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            ClientError::Rejected { message, errors } if errors.is_empty() => {
                vec![message.clone()]
            }
            ClientError::Rejected { errors, .. } => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
