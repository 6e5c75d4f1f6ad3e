use thiserror::Error;

pub const SERVER_FALLBACK_MESSAGE: &str = "An error occurred on the server";
pub const UNREACHABLE_MESSAGE: &str = "Server is not responding. Check your internet connection.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure a backend call can end in, normalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with an error status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request went out but no response came back.
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,
    /// The request could not be built or the response could not be understood.
    #[error("{}", UNEXPECTED_MESSAGE)]
    Client { reason: String },
}

impl ApiError {
    /// HTTP status for server errors, `0` when unreachable, `-1` otherwise.
    pub fn status(&self) -> i32 {
        match self {
            ApiError::Server { status, .. } => i32::from(*status),
            ApiError::Unreachable => 0,
            ApiError::Client { .. } => -1,
        }
    }

    /// The text shown in the notification.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Build a server error from a non-2xx response body, using its `detail` field.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
            .unwrap_or_else(|| SERVER_FALLBACK_MESSAGE.to_string());
        ApiError::Server { status, message }
    }

    /// Classify a transport-level failure.
    pub fn from_transport(e: reqwest::Error) -> Self {
        if e.is_builder() {
            ApiError::Client {
                reason: e.to_string(),
            }
        } else if e.is_connect() || e.is_timeout() || e.is_request() || e.is_body() {
            ApiError::Unreachable
        } else {
            ApiError::Client {
                reason: e.to_string(),
            }
        }
    }
}
