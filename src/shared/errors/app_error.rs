use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl AppError {
    /// Message carried by the error, without the variant prefix.
    ///
    /// Screen state only ever stores this string: callers above the repository
    /// never branch on the kind of failure.
    pub fn message(&self) -> &str {
        match self {
            AppError::ApiError(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::SerializationError(msg)
            | AppError::NotFound(msg)
            | AppError::InvalidInput(msg)
            | AppError::ConfigurationError(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            AppError::ExternalServiceError(format!("HTTP {}: {}", status, err))
        } else if err.is_decode() {
            AppError::SerializationError(err.to_string())
        } else {
            AppError::ExternalServiceError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ConfigurationError(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
