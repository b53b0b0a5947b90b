//! Error types surfaced by the client flows.

use serde_json::Value;

/// User-facing message for any transport or decoding failure.
pub const CONNECTIVITY_MESSAGE: &str = "Failed to connect to backend";

/// Errors produced while talking to the shortening service.
///
/// Every variant ends up in front of the user; none is retried.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Please enter a URL")]
    MissingUrl,

    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// Transport failure or a body that is not the expected JSON.
    ///
    /// Both cases collapse into one kind; the reason is kept for logs only.
    #[error("Failed to connect to backend: {0}")]
    Connectivity(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Coarse classification used by the flows to pick what to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Server,
    Connectivity,
    Configuration,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::MissingUrl => ErrorKind::Validation,
            ClientError::Server { .. } => ErrorKind::Server,
            ClientError::Connectivity(_) => ErrorKind::Connectivity,
            ClientError::InvalidBaseUrl(_) => ErrorKind::Configuration,
        }
    }

    /// Text shown to the user in an alert.
    ///
    /// Connectivity failures hide the underlying reason.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Connectivity(_) => CONNECTIVITY_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Builds a server error from a non-2xx status and its decoded JSON body.
    pub fn from_response_body(status: u16, body: &Value) -> Self {
        let detail = detail_message(body)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        ClientError::Server { status, detail }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Connectivity(e.to_string())
    }
}

/// Extracts a readable message from a `{"detail": ...}` error body.
///
/// `detail` is a plain string for most errors and a list of
/// `{loc, msg, type}` objects for request validation failures.
fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .map(|item| match item.get("msg").and_then(Value::as_str) {
                    Some(msg) => msg.to_string(),
                    None => item.to_string(),
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}
