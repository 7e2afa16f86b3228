//! Error types for community admin operations.
//!
//! Role decoding and toggling never fail; these errors only cover talking to
//! the directory API and coordinating saves.

use thiserror::Error;

use crate::record::AdminId;

/// Community admin error types.
#[derive(Debug, Error)]
pub enum AdminError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// Admin not found, either upstream or in the loaded roster.
    #[error("Community admin not found: {0}")]
    AdminNotFound(AdminId),

    /// Authentication failed.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Another save for the same admin has not finished yet.
    #[error("A save is already in progress for community admin {0}")]
    SaveInFlight(AdminId),
}

/// Result type for community admin operations.
pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    /// Check if this error should be logged at error level.
    pub fn is_server_error(&self) -> bool {
        match self {
            AdminError::ApiError { status, .. } => *status >= 500,
            AdminError::RequestFailed(_) | AdminError::InvalidResponse(_) => true,
            _ => false,
        }
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AdminError::ApiError { status, .. } => *status,
            AdminError::AdminNotFound(_) => 404,
            AdminError::AuthenticationFailed => 401,
            AdminError::SaveInFlight(_) => 409,
            AdminError::RequestFailed(_) | AdminError::InvalidResponse(_) => 502,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::RequestFailed(_) => "REQUEST_FAILED",
            AdminError::ApiError { .. } => "API_ERROR",
            AdminError::InvalidResponse(_) => "INVALID_RESPONSE",
            AdminError::AdminNotFound(_) => "ADMIN_NOT_FOUND",
            AdminError::AuthenticationFailed => "AUTHENTICATION_FAILED",
            AdminError::SaveInFlight(_) => "SAVE_IN_FLIGHT",
        }
    }
}
