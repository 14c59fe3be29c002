use thiserror::Error;

use crate::model::WeatherQuery;

/// Why a lookup failed. Only used for diagnostics: every variant is shown to
/// the user as the same [`failure_message`].
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request to weather provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("weather provider response has no condition entry")]
    MissingCondition,

    #[error("invalid provider base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// The single user-visible error string for a failed lookup.
pub fn failure_message(query: &WeatherQuery) -> String {
    format!("City not found. Try again.{query}")
}
