//! Login Use Case
//!
//! Verifies credentials and mints a bearer token. Both kinds look up by
//! email when one is supplied, otherwise by mobile.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credentials::verify_password;
use crate::application::required;
use crate::application::token::TokenIssuer;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, account_kind::AccountKind, account_password::RawPassword,
    email::Email, mobile::Mobile,
};
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Default)]
pub struct LoginInput {
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub password: Option<String>,
}

pub struct LoginOutput {
    pub token: String,
    pub account_id: AccountId,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenIssuer>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, tokens: Arc<TokenIssuer>) -> Self {
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, kind: AccountKind, input: LoginInput) -> AuthResult<LoginOutput> {
        let Some(password) = required(input.password) else {
            return Err(AuthError::MissingFields);
        };

        // A key that cannot be stored cannot match a record either
        let account = match (required(input.email), required(input.mobile)) {
            (Some(email), _) => {
                let email = Email::new(email).map_err(|_| AuthError::NotRegistered(kind))?;
                self.repo.find_by_email(kind, &email).await?
            }
            (None, Some(mobile)) => {
                let mobile = Mobile::new(mobile).map_err(|_| AuthError::NotRegistered(kind))?;
                self.repo.find_by_mobile(kind, &mobile).await?
            }
            (None, None) => return Err(AuthError::MissingFields),
        };

        let account = account
            .filter(|a| a.is_active())
            .ok_or(AuthError::NotRegistered(kind))?;

        let raw_password = RawPassword::new(password)?;
        let valid = verify_password(raw_password, account.password.clone(), self.config.clone())
            .await?;

        if !valid {
            return Err(AuthError::IncorrectCredentials);
        }

        let token = self.tokens.issue(kind, &account.account_id)?;

        tracing::info!(
            account_id = %account.account_id,
            kind = %kind,
            "Account logged in"
        );

        Ok(LoginOutput {
            token,
            account_id: account.account_id,
        })
    }
}
