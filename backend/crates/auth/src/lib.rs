//! Auth (Accounts) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Account entity, value objects, repository trait
//! - `application/` - Use cases, token issuer, configuration
//! - `infra/` - PostgreSQL and in-memory Credential Stores
//! - `presentation/` - HTTP handlers, DTOs, router, authorization gate
//!
//! ## Features
//! - Register / login / profile / edit / soft delete for buyers and sellers
//! - Stateless HMAC-SHA256 bearer tokens, one secret per account kind
//! - Per-kind authorization gate attaching a `Principal` to requests
//!
//! ## Security Model
//! - Passwords hashed with Argon2id on the blocking pool
//! - A token minted for one kind never verifies for the other
//! - Tokens expire (24 hours by default); there is no server-side session

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::{AuthConfig, ConfigError};
pub use application::token::TokenIssuer;
pub use domain::value_object::account_id::AccountId;
pub use domain::value_object::account_kind::AccountKind;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryAccountRepository, PgAccountRepository};
pub use presentation::middleware::{AuthGate, Principal, require_principal};
pub use presentation::router::{account_router, account_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
