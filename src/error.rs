//! Errors raised while talking to the catalog service or reading config.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Message shown when a failure carries nothing more specific.
pub(crate) const GENERIC_MESSAGE: &str = "An error occurred";

/// Failure of a catalog request.
///
/// Every variant formats to a message fit to show the shopper as-is.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The service could not be reached or did not answer in time.
    #[error("{0}")]
    NetworkFailure(String),
    /// The service answered with a non-success status.
    #[error("{message}")]
    ServiceError { status: StatusCode, message: String },
    /// The requested product does not exist.
    #[error("{message}")]
    NotFound { message: String },
    /// A success response whose body is not the expected shape.
    #[error("unexpected response from catalog service: {0}")]
    InvalidResponse(#[source] serde_json::Error),
    /// A request URL could not be built from the configured base.
    #[error("invalid catalog url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl CatalogError {
    /// Builds the error for a non-success response from its status and raw body.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let message = service_message(body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or(GENERIC_MESSAGE).to_string());
        if status == StatusCode::NOT_FOUND {
            CatalogError::NotFound { message }
        } else {
            CatalogError::ServiceError { status, message }
        }
    }

    /// HTTP status reported by the service, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CatalogError::ServiceError { status, .. } => Some(*status),
            CatalogError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return CatalogError::from_status(status, "");
        }
        let message = if err.is_timeout() {
            "The catalog service took too long to respond".to_string()
        } else if err.is_connect() {
            "Unable to reach the catalog service".to_string()
        } else {
            GENERIC_MESSAGE.to_string()
        };
        CatalogError::NetworkFailure(message)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts the optional `message` field of an error body.
fn service_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}

/// Invalid catalog configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid catalog base url '{value}'")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("catalog base url '{0}' cannot have paths joined onto it")]
    NotABase(String),
    #[error("invalid catalog timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}
