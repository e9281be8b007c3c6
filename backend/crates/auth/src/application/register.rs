//! Register Use Case
//!
//! Creates a new account of the given kind.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credentials::hash_password;
use crate::application::required;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, account_kind::AccountKind, account_password::RawPassword,
    email::Email, full_name::FullName,
};
use crate::error::{AuthError, AuthResult};

/// Register input (fields as received; absence is checked here)
#[derive(Debug, Default)]
pub struct RegisterInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct RegisterOutput {
    pub account_id: AccountId,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, kind: AccountKind, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let (Some(full_name), Some(email), Some(password)) = (
            required(input.full_name),
            required(input.email),
            required(input.password),
        ) else {
            return Err(AuthError::MissingFields);
        };

        let full_name = FullName::new(full_name)?;
        let email = Email::new(email)?;
        let raw_password = RawPassword::new(password)?;

        // Existence, not activity: a deleted account keeps its email
        if self.repo.exists_by_email(kind, &email).await? {
            return Err(AuthError::AlreadyExists(kind));
        }

        let password = hash_password(raw_password, self.config.clone()).await?;
        let account = Account::register(kind, full_name, email, password);

        // A concurrent registration may win the unique constraint
        self.repo.create(&account).await.map_err(|e| match e {
            AuthError::EmailTaken => AuthError::AlreadyExists(kind),
            other => other,
        })?;

        tracing::info!(
            account_id = %account.account_id,
            kind = %kind,
            "Account registered"
        );

        Ok(RegisterOutput {
            account_id: account.account_id,
        })
    }
}
