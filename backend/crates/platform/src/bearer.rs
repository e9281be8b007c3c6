//! Bearer Token Extraction
//!
//! Reads `Authorization: Bearer <token>` without ever assuming the header
//! is present or well formed.

use axum::http::{HeaderMap, header};
use thiserror::Error;

const BEARER_PREFIX: &str = "Bearer ";

/// Why no token could be read from a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    /// No `Authorization` header at all
    #[error("Authorization header is missing")]
    MissingHeader,

    /// Header present but not valid visible ASCII
    #[error("Authorization header is not valid text")]
    InvalidHeader,

    /// Header present but not of the form `Bearer <token>`
    #[error("Authorization header is not a bearer token")]
    NotBearer,

    /// `Bearer ` prefix with nothing after it
    #[error("Bearer token is empty")]
    EmptyToken,
}

/// Extract the bearer token from request headers
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::MissingHeader)?;

    let value = value.to_str().map_err(|_| BearerError::InvalidHeader)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(BearerError::NotBearer)?
        .trim();

    if token.is_empty() {
        return Err(BearerError::EmptyToken);
    }

    Ok(token)
}
