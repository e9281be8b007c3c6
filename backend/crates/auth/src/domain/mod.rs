//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::account::Account;
pub use repository::AccountRepository;
pub use value_object::account_kind::AccountKind;
