//! Typed error enum for the provider crate.

use thiserror::Error;

/// Errors from weather/geocoding API operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No API key configured. The client fails fast at construction; there
    /// is no synthetic-data fallback.
    #[error("no weather API key configured")]
    MissingCredentials,
    #[error("invalid weather API key")]
    InvalidCredentials,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("weather API error: HTTP {code} {text}")]
    Status { code: u16, text: String },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    /// Response decoded but violates the documented shape (e.g. empty
    /// `weather` array).
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ProviderError {
    /// Whether this error is transient (timeout, upstream hiccup) and a
    /// later retry may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Status { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }
}
