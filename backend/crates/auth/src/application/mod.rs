//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod credentials;
pub mod delete_account;
pub mod edit_profile;
pub mod login;
pub mod profile;
pub mod register;
pub mod token;

// Re-exports
pub use config::{AuthConfig, ConfigError};
pub use delete_account::DeleteAccountUseCase;
pub use edit_profile::{EditProfileInput, EditProfileUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use profile::{ProfileOutput, ProfileUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use token::{TokenClaims, TokenError, TokenIssuer};

/// Absent and empty both count as "not provided"
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
