//! Delete Account Use Case
//!
//! Soft delete. The row stays, and so do products, cart entries and orders
//! that reference it. Repeating the call is a no-op.

use std::sync::Arc;

use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_id::AccountId, account_kind::AccountKind};
use crate::error::{AuthError, AuthResult};

pub struct DeleteAccountUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteAccountUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, kind: AccountKind, account_id: &AccountId) -> AuthResult<()> {
        let mut account = self
            .repo
            .find_by_id(kind, account_id)
            .await?
            .ok_or(AuthError::AccountNotFound(kind))?;

        if !account.deactivate() {
            tracing::debug!(account_id = %account_id, kind = %kind, "Account already inactive");
            return Ok(());
        }

        self.repo.update(&account).await?;

        tracing::info!(account_id = %account_id, kind = %kind, "Account deactivated");

        Ok(())
    }
}
