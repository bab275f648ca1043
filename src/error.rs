use reqwest::StatusCode;
use std::error::Error as StdError;
use thiserror::Error;

use crate::constants::NOT_COVERED_MESSAGE;

/// Outcome classes of a single upstream GET.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Connection, DNS, timeout, or body read failure.
    #[error("{}", with_causes(.0))]
    Transport(#[from] reqwest::Error),
    #[error("{status} for url: {url}")]
    Status { status: StatusCode, url: String },
    /// The body is not the JSON shape we expect.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("City not found: {0}")]
    NotFound(String),
    #[error("Geocoding failed: {0}")]
    Request(#[from] RequestError),
    #[error("Geocoding failed: invalid {field} coordinate {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("{}", NOT_COVERED_MESSAGE)]
    NotCovered,
    #[error("API error: {status} for url: {url}")]
    Api { status: StatusCode, url: String },
    #[error("Network error: {}", with_causes(.0))]
    Network(reqwest::Error),
    #[error("Unexpected API response format: {0}")]
    Format(String),
}

impl From<RequestError> for ForecastError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Transport(e) => Self::Network(e),
            RequestError::Status { status, url } => Self::Api { status, url },
            RequestError::Decode(e) => Self::Format(e.to_string()),
        }
    }
}

/// Formats an error followed by each of its sources, joined with `: `.
///
/// reqwest's own message stops at "error sending request for url (...)";
/// the reason (refused, timed out, DNS) lives further down the chain.
fn with_causes(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
