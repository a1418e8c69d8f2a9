// HTTP API Error Types
use serde_json::Value;

/// Errors surfaced by the HTTP client layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401 from any endpoint. The caller decides how to re-authenticate;
    /// this crate never retries with different credentials on its own.
    #[error("authentication required (token missing, expired or rejected)")]
    AuthRequired,

    /// Any other non-2xx response, with the server's own message when the
    /// body carried one.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Connection-level failure: DNS, refused, reset, timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a `Rejected` error from a status code and raw response body,
    /// extracting the server's message when the body is JSON. Backends in
    /// the wild disagree on the key: plain handlers use "error", DRF-style
    /// ones use "detail", older ones use "message".
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                ["error", "detail", "message"]
                    .iter()
                    .find_map(|key| v.get(key).and_then(Value::as_str).map(String::from))
            })
            .unwrap_or_else(|| format!("server returned HTTP {}", status));

        ApiError::Rejected { status, message }
    }

    /// HTTP status associated with the error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::AuthRequired => Some(401),
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// Whether a single repeat of an idempotent request is worth trying.
    /// Transport failures and gateway-class statuses qualify; everything
    /// else is a definitive answer from the server.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Rejected { status, .. } => matches!(status, 502 | 503 | 504),
            _ => false,
        }
    }
}
