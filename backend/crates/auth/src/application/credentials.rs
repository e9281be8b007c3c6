//! Password Hasher adapters
//!
//! Argon2id is CPU-bound; both directions run on the blocking pool so a
//! login never stalls the async workers.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::value_object::account_password::{AccountPassword, RawPassword};
use crate::error::{AuthError, AuthResult};

pub async fn hash_password(
    raw: RawPassword,
    config: Arc<AuthConfig>,
) -> AuthResult<AccountPassword> {
    tokio::task::spawn_blocking(move || AccountPassword::from_raw(&raw, config.pepper()))
        .await
        .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {e}")))?
        .map_err(AuthError::from)
}

/// A mismatch is `Ok(false)`, not an error
pub async fn verify_password(
    raw: RawPassword,
    stored: AccountPassword,
    config: Arc<AuthConfig>,
) -> AuthResult<bool> {
    tokio::task::spawn_blocking(move || stored.verify(&raw, config.pepper()))
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> RawPassword {
        RawPassword::new(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_hash_then_verify_off_thread() {
        let config = Arc::new(AuthConfig::development().with_pepper(Some(b"pepper".to_vec())));

        let stored = hash_password(raw("pw1"), config.clone()).await.unwrap();

        assert!(verify_password(raw("pw1"), stored.clone(), config.clone()).await.unwrap());
        assert!(!verify_password(raw("pw2"), stored, config).await.unwrap());
    }
}
