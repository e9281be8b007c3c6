//! Profile Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_id::AccountId, account_kind::AccountKind};
use crate::error::{AuthError, AuthResult};

/// Everything about an account except its password hash
#[derive(Debug, Clone)]
pub struct ProfileOutput {
    pub account_id: AccountId,
    pub full_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for ProfileOutput {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id,
            full_name: account.full_name.to_string(),
            email: account.email.to_string(),
            mobile: account.mobile.as_ref().map(|m| m.to_string()),
            address: account.address.clone(),
            created_at: account.created_at,
        }
    }
}

pub struct ProfileUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> ProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, kind: AccountKind, account_id: &AccountId) -> AuthResult<ProfileOutput> {
        let account = self
            .repo
            .find_by_id(kind, account_id)
            .await?
            .filter(|a| a.is_active())
            .ok_or(AuthError::AccountNotFound(kind))?;

        Ok(ProfileOutput::from(&account))
    }
}
