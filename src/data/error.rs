use std::error::Error;
use std::fmt;

/// Failure of a single REST call.
///
/// Every variant names the endpoint so the log line alone says which of the
/// three per-cycle requests broke.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, body read interrupted, ...
    Transport {
        endpoint: &'static str,
        message: String,
    },
    /// The server answered with a non-2xx status.
    Status { endpoint: &'static str, status: u16 },
    /// The body was not JSON of the expected shape.
    Decode {
        endpoint: &'static str,
        message: String,
    },
}

impl ApiError {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport { endpoint, message } => {
                write!(f, "Failed to fetch {} data: {}", endpoint, message)
            }
            ApiError::Status { endpoint, status } => {
                write!(f, "Failed to fetch {} data: HTTP status {}", endpoint, status)
            }
            ApiError::Decode { endpoint, message } => {
                write!(f, "Invalid {} response body: {}", endpoint, message)
            }
        }
    }
}

impl Error for ApiError {}
