//! Error types for the Utrust client

use serde_json::Value;
use thiserror::Error;

/// Result type alias for Utrust client operations
pub type Result<T> = std::result::Result<T, UtrustError>;

/// Main error type for Utrust client operations
#[derive(Error, Debug)]
pub enum UtrustError {
    /// The connection could not be completed (DNS, TCP, TLS)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway did not answer within the request timeout
    #[error("Request timeout")]
    Timeout,

    /// A response was received but its body is not usable JSON
    #[error("Unable to parse JSON result: {message}")]
    MalformedResponse { message: String },

    /// The gateway answered with an `errors` payload
    #[error("Request error: {}", render_errors(.errors))]
    Request {
        /// HTTP status of the response carrying the errors
        status: u16,
        /// The `errors` payload exactly as the gateway sent it
        errors: Value,
    },

    /// A well-formed success response lacks a required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Non-2xx response without an `errors` payload
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl UtrustError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Classify a transport error, promoting timeouts to [`UtrustError::Timeout`]
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(error)
        }
    }

    /// Whether the gateway returned an `errors` payload
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::Request { .. })
    }

    /// Whether a required response field was missing
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Whether no usable response was received at all
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }

    /// The gateway's `errors` payload, if this is a request error
    pub fn errors(&self) -> Option<&Value> {
        match self {
            Self::Request { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Render an `errors` payload for humans: strings verbatim, anything else as compact JSON
pub fn render_errors(errors: &Value) -> String {
    match errors {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}
