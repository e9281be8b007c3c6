//! Shop Error Types
//!
//! Shop-specific error variants on top of `kernel::error::AppError`.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::body::BodyRejection;
use thiserror::Error;

pub type ShopResult<T> = Result<T, ShopError>;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("{0}")]
    Validation(String),

    #[error("Please provide all the required fields")]
    MissingFields,

    #[error("Category name cannot be empty!")]
    EmptyCategoryName,

    #[error("Category already exists!")]
    CategoryExists,

    #[error("Category does not exist")]
    CategoryNotFound,

    /// Cart route without `productId`
    #[error("Product Id is missing")]
    MissingProductId,

    /// Buy route without `productId`
    #[error("Product ID is missing")]
    MissingOrderProductId,

    /// Unknown product on the cart route (400)
    #[error("Product does not exist")]
    ProductNotFound,

    /// Unknown product on the buy route (404)
    #[error("Product does not exist")]
    OrderProductNotFound,

    #[error("Invalid quantity")]
    InvalidQuantity,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShopError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShopError::OrderProductNotFound => StatusCode::NOT_FOUND,
            ShopError::Database(_) | ShopError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ShopError::OrderProductNotFound => ErrorKind::NotFound,
            ShopError::Database(_) | ShopError::Internal(_) => ErrorKind::InternalServerError,
            _ => ErrorKind::BadRequest,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            ShopError::Database(e) => AppError::from(e),
            ShopError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            ShopError::Database(e) => tracing::error!(error = %e, "Shop database error"),
            ShopError::Internal(msg) => tracing::error!(message = %msg, "Shop internal error"),
            _ => tracing::debug!(error = %self, "Shop error"),
        }
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<BodyRejection> for ShopError {
    fn from(rejection: BodyRejection) -> Self {
        ShopError::Validation(rejection.to_string())
    }
}

impl From<QueryRejection> for ShopError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected query string");
        ShopError::Validation("Invalid query string".to_string())
    }
}
