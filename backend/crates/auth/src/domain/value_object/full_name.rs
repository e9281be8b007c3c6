//! Full Name Value Object

use kernel::error::app_error::{AppError, AppResult};

const FULL_NAME_MAX_CHARS: usize = 100;

/// Display name of an account holder (free text, trimmed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Full name cannot be empty"));
        }

        if name.chars().count() > FULL_NAME_MAX_CHARS {
            return Err(AppError::bad_request(format!(
                "Full name must be at most {} characters",
                FULL_NAME_MAX_CHARS
            )));
        }

        Ok(Self(name))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
