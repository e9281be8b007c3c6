//! Edit Profile Use Case
//!
//! `full_name` and `email` are required. `mobile` and `address` replace
//! the stored values (absent clears them). The password is re-hashed only
//! when this request carries one.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credentials::hash_password;
use crate::application::profile::ProfileOutput;
use crate::application::required;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, account_kind::AccountKind, account_password::RawPassword,
    email::Email, full_name::FullName, mobile::Mobile,
};
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Default)]
pub struct EditProfileInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}

pub struct EditProfileUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> EditProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        kind: AccountKind,
        account_id: &AccountId,
        input: EditProfileInput,
    ) -> AuthResult<ProfileOutput> {
        let (Some(full_name), Some(email)) = (required(input.full_name), required(input.email))
        else {
            return Err(AuthError::MissingProfileFields);
        };

        let full_name = FullName::new(full_name)?;
        let email = Email::new(email)?;
        let mobile = required(input.mobile).map(Mobile::new).transpose()?;
        let address = input
            .address
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());
        let raw_password = required(input.password).map(RawPassword::new).transpose()?;

        let mut account = self
            .repo
            .find_by_id(kind, account_id)
            .await?
            .filter(|a| a.is_active())
            .ok_or(AuthError::AccountNotFound(kind))?;

        if email != account.email {
            if let Some(other) = self.repo.find_by_email(kind, &email).await? {
                if other.account_id != account.account_id {
                    return Err(AuthError::EmailTaken);
                }
            }
        }

        if let Some(mobile) = mobile.as_ref().filter(|m| Some(*m) != account.mobile.as_ref()) {
            if let Some(other) = self.repo.find_by_mobile(kind, mobile).await? {
                if other.account_id != account.account_id {
                    return Err(AuthError::MobileTaken);
                }
            }
        }

        account.update_profile(full_name, email, mobile, address);

        let password_changed = raw_password.is_some();
        if let Some(raw_password) = raw_password {
            let password = hash_password(raw_password, self.config.clone()).await?;
            account.change_password(password);
        }

        self.repo.update(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            kind = %kind,
            password_changed,
            "Profile updated"
        );

        Ok(ProfileOutput::from(&account))
    }
}
