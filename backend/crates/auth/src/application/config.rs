//! Application Configuration
//!
//! Token secrets, token lifetime and password pepper for the auth layer.
//! Built once at startup and passed into constructors.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::value_object::account_kind::AccountKind;

/// Default token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

/// Upper bound for a configured token lifetime (one year)
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(365 * 24 * 3600);

const DEVELOPMENT_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} token secret must not be empty")]
    EmptySecret(AccountKind),

    #[error("buyer and seller token secrets must differ")]
    SharedSecret,

    #[error("token lifetime must be between one second and one year")]
    InvalidTokenTtl,
}

/// HMAC key for one account kind
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct TokenSecret(Vec<u8>);

impl TokenSecret {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TokenSecret").field(&"[REDACTED]").finish()
    }
}

/// Auth application configuration
///
/// Invariant: both secrets are non-empty and distinct, so a token minted
/// for one kind can never verify under the other.
#[derive(Clone)]
pub struct AuthConfig {
    buyer_secret: TokenSecret,
    seller_secret: TokenSecret,
    token_ttl: Duration,
    password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(
        buyer_secret: impl Into<Vec<u8>>,
        seller_secret: impl Into<Vec<u8>>,
    ) -> Result<Self, ConfigError> {
        let buyer_secret = TokenSecret(buyer_secret.into());
        let seller_secret = TokenSecret(seller_secret.into());

        if buyer_secret.0.is_empty() {
            return Err(ConfigError::EmptySecret(AccountKind::Buyer));
        }
        if seller_secret.0.is_empty() {
            return Err(ConfigError::EmptySecret(AccountKind::Seller));
        }
        if buyer_secret.0 == seller_secret.0 {
            return Err(ConfigError::SharedSecret);
        }

        Ok(Self {
            buyer_secret,
            seller_secret,
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        })
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Result<Self, ConfigError> {
        if ttl.as_secs() == 0 || ttl > MAX_TOKEN_TTL {
            return Err(ConfigError::InvalidTokenTtl);
        }
        self.token_ttl = ttl;
        Ok(self)
    }

    pub fn with_pepper(mut self, pepper: Option<Vec<u8>>) -> Self {
        self.password_pepper = pepper.filter(|p| !p.is_empty());
        self
    }

    /// Random distinct secrets (for development and tests)
    pub fn development() -> Self {
        use rand::RngCore;

        let mut buyer = vec![0u8; DEVELOPMENT_SECRET_LEN];
        let mut seller = vec![0u8; DEVELOPMENT_SECRET_LEN];
        let mut rng = rand::rng();
        rng.fill_bytes(&mut buyer);
        loop {
            rng.fill_bytes(&mut seller);
            if seller != buyer {
                break;
            }
        }

        Self {
            buyer_secret: TokenSecret(buyer),
            seller_secret: TokenSecret(seller),
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }

    pub fn secret_for(&self, kind: AccountKind) -> &TokenSecret {
        match kind {
            AccountKind::Buyer => &self.buyer_secret,
            AccountKind::Seller => &self.seller_secret,
        }
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("buyer_secret", &self.buyer_secret)
            .field("seller_secret", &self.seller_secret)
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
