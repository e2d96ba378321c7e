use thiserror::Error;

/// Errors produced by the backend data-access client
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("{method} {url} failed: {status} {status_text}")]
    Status {
        method: String,
        url: String,
        status: u16,
        status_text: String,
        /// Response body, when the backend sent one
        body: Option<String>,
    },

    /// The request never produced a response
    #[error("Network error during {method} {url}: {message}")]
    Network {
        method: String,
        url: String,
        message: String,
    },

    /// A success response whose body is not the expected JSON
    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Invalid backend base URL: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

/// Errors produced when configuring a trading strategy
#[derive(Error, Debug, PartialEq)]
pub enum StrategyError {
    #[error("Invalid window size for strategy {name}: {window_size} (must be at least 1)")]
    InvalidWindow { name: String, window_size: usize },
}

impl ApiError {
    /// HTTP status of a `Status` error
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
