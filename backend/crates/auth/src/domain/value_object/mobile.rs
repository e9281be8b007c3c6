//! Mobile Number Value Object
//!
//! Ten ASCII digits (`1000000000`..=`9999999999`). Unique per kind when
//! present, and usable as a login key.

use kernel::error::app_error::{AppError, AppResult};

const MOBILE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mobile(String);

impl Mobile {
    pub fn new(mobile: impl Into<String>) -> AppResult<Self> {
        let mobile = mobile.into().trim().to_string();

        let well_formed = mobile.len() == MOBILE_DIGITS
            && mobile.bytes().all(|b| b.is_ascii_digit())
            && !mobile.starts_with('0');

        if !well_formed {
            return Err(AppError::bad_request(format!(
                "Mobile number must be {} digits",
                MOBILE_DIGITS
            )));
        }

        Ok(Self(mobile))
    }

    pub fn from_db(mobile: impl Into<String>) -> Self {
        Self(mobile.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Mobile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_valid() {
        assert_eq!(Mobile::new(" 9876543210 ").unwrap().as_str(), "9876543210");
        assert!(Mobile::new("1000000000").is_ok());
    }

    #[test]
    fn test_mobile_invalid() {
        assert!(Mobile::new("").is_err());
        assert!(Mobile::new("12345").is_err());
        assert!(Mobile::new("98765432100").is_err());
        assert!(Mobile::new("0123456789").is_err());
        assert!(Mobile::new("98765-4321").is_err());
        assert!(Mobile::new("９８７６５４３２１０").is_err());
    }
}
