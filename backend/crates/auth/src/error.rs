//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::BearerError;
use platform::body::BodyRejection;
use thiserror::Error;

use crate::domain::value_object::account_kind::AccountKind;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Duplicate records and bad credentials answer 400, token problems 401.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unreadable or malformed request body
    #[error("{0}")]
    Validation(String),

    /// Value-object rejection; keeps the suggested action for the response
    #[error("{}", .0.message())]
    InvalidInput(AppError),

    #[error("Please provide all the required fields")]
    MissingFields,

    /// Edit profile without name or email
    #[error("Name and Email cannot be empty")]
    MissingProfileFields,

    #[error("{} already exists! Try logging in.", .0.label())]
    AlreadyExists(AccountKind),

    /// Login against an unknown or deleted account
    #[error("{} does not exist! Try registering.", .0.label())]
    NotRegistered(AccountKind),

    /// Authenticated principal without a live record
    #[error("{} does not exist", .0.label())]
    AccountNotFound(AccountKind),

    #[error("Incorrect Credentials")]
    IncorrectCredentials,

    #[error("Email is already in use")]
    EmailTaken,

    #[error("Mobile number is already in use")]
    MobileTaken,

    #[error("Authentication token is missing")]
    TokenMissing,

    /// Invalid, expired or wrong-kind token
    #[error("You are not authorized to access this route")]
    Unauthorized,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::TokenMissing | AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::TokenMissing | AuthError::Unauthorized => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
            _ => ErrorKind::BadRequest,
        }
    }

    /// Convert to AppError; internal detail never reaches the message
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            AuthError::InvalidInput(e) => e,
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::IncorrectCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Unauthorized => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::InvalidInput(err),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<BodyRejection> for AuthError {
    fn from(rejection: BodyRejection) -> Self {
        AuthError::Validation(rejection.to_string())
    }
}

impl From<BearerError> for AuthError {
    fn from(_: BearerError) -> Self {
        AuthError::TokenMissing
    }
}
