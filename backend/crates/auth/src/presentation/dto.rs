//! API DTOs (Data Transfer Objects)
//!
//! Request fields are all optional so that "missing" is reported by the
//! use case with its own message rather than as a JSON error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ProfileOutput;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request (`email` wins when both keys are sent)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditProfileRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    /// Re-hashed only when present
    pub password: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Profile response; never carries the password hash
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ProfileOutput> for ProfileResponse {
    fn from(output: ProfileOutput) -> Self {
        Self {
            id: output.account_id.to_string(),
            full_name: output.full_name,
            email: output.email,
            mobile: output.mobile,
            address: output.address,
            created_at: output.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EditProfileResponse {
    pub message: String,
    pub profile: ProfileResponse,
}
