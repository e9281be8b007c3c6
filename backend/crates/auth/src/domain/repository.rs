//! Repository Traits
//!
//! Credential Store interface. Implementations live in the infra layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{
    account_id::AccountId, account_kind::AccountKind, email::Email, mobile::Mobile,
};
use crate::error::AuthResult;

/// Account repository trait
///
/// Lookups return inactive records too; callers decide what an inactive
/// account means for them. Uniqueness of `(kind, email)` and
/// `(kind, mobile)` is enforced by the store and reported as
/// `AuthError::EmailTaken` / `AuthError::MobileTaken`.
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account
    async fn create(&self, account: &Account) -> AuthResult<()>;

    async fn find_by_id(
        &self,
        kind: AccountKind,
        account_id: &AccountId,
    ) -> AuthResult<Option<Account>>;

    async fn find_by_email(&self, kind: AccountKind, email: &Email)
    -> AuthResult<Option<Account>>;

    async fn find_by_mobile(
        &self,
        kind: AccountKind,
        mobile: &Mobile,
    ) -> AuthResult<Option<Account>>;

    /// Existence check, regardless of `active`
    async fn exists_by_email(&self, kind: AccountKind, email: &Email) -> AuthResult<bool>;

    /// Persist every mutable column of an existing account
    async fn update(&self, account: &Account) -> AuthResult<()>;
}
