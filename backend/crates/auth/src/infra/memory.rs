//! In-Memory Repository Implementation
//!
//! Same contract as the PostgreSQL store, including the `(kind, email)`
//! and `(kind, mobile)` uniqueness rules. Used by tests and local runs
//! without a database.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, account_kind::AccountKind, email::Email, mobile::Mobile,
};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_unique(accounts: &HashMap<AccountId, Account>, candidate: &Account) -> AuthResult<()> {
        let others = accounts
            .values()
            .filter(|a| a.kind == candidate.kind && a.account_id != candidate.account_id);

        for other in others {
            if other.email == candidate.email {
                return Err(AuthError::EmailTaken);
            }
            if other.mobile.is_some() && other.mobile == candidate.mobile {
                return Err(AuthError::MobileTaken);
            }
        }

        Ok(())
    }

    async fn find_where(
        &self,
        kind: AccountKind,
        matches: impl Fn(&Account) -> bool,
    ) -> Option<Account> {
        self.accounts
            .read()
            .await
            .values()
            .find(|a| a.kind == kind && matches(a))
            .cloned()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.account_id) {
            return Err(AuthError::Internal("Duplicate account id".to_string()));
        }
        Self::check_unique(&accounts, account)?;

        accounts.insert(account.account_id, account.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        kind: AccountKind,
        account_id: &AccountId,
    ) -> AuthResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .get(account_id)
            .filter(|a| a.kind == kind)
            .cloned())
    }

    async fn find_by_email(&self, kind: AccountKind, email: &Email) -> AuthResult<Option<Account>> {
        Ok(self.find_where(kind, |a| &a.email == email).await)
    }

    async fn find_by_mobile(
        &self,
        kind: AccountKind,
        mobile: &Mobile,
    ) -> AuthResult<Option<Account>> {
        Ok(self
            .find_where(kind, |a| a.mobile.as_ref() == Some(mobile))
            .await)
    }

    async fn exists_by_email(&self, kind: AccountKind, email: &Email) -> AuthResult<bool> {
        Ok(self.find_by_email(kind, email).await?.is_some())
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.account_id) {
            return Ok(());
        }
        Self::check_unique(&accounts, account)?;

        accounts.insert(account.account_id, account.clone());
        Ok(())
    }
}
