//! Token Issuer / Verifier
//!
//! Stateless HS256 JWTs. Each kind signs with its own secret, and the
//! `kind` claim is checked again after decoding, so a buyer token never
//! authorizes a seller route.

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::{account_id::AccountId, account_kind::AccountKind};
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Account the token was minted for
    pub sub: Uuid,
    pub kind: AccountKind,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds, exclusive)
    pub exp: i64,
}

impl TokenClaims {
    pub fn account_id(&self) -> AccountId {
        AccountId::from_uuid(self.sub)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
    #[error("token signature mismatch")]
    BadSignature,
    #[error("token issued for another account kind")]
    WrongKind,
    #[error("token expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::InvalidSignature => TokenError::BadSignature,
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(_: TokenError) -> Self {
        AuthError::Unauthorized
    }
}

struct KindKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KindKeys {
    fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

pub struct TokenIssuer {
    buyer: KindKeys,
    seller: KindKeys,
    /// Seconds; bounded by `MAX_TOKEN_TTL`
    ttl: i64,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            buyer: KindKeys::new(config.secret_for(AccountKind::Buyer).as_bytes()),
            seller: KindKeys::new(config.secret_for(AccountKind::Seller).as_bytes()),
            ttl: i64::try_from(config.token_ttl().as_secs()).unwrap_or(i64::MAX),
            validation,
        }
    }

    fn keys(&self, kind: AccountKind) -> &KindKeys {
        match kind {
            AccountKind::Buyer => &self.buyer,
            AccountKind::Seller => &self.seller,
        }
    }

    pub fn issue(&self, kind: AccountKind, account_id: &AccountId) -> AuthResult<String> {
        self.issue_at(kind, account_id, Utc::now())
    }

    pub fn issue_at(
        &self,
        kind: AccountKind,
        account_id: &AccountId,
        now: DateTime<Utc>,
    ) -> AuthResult<String> {
        let iat = now.timestamp();
        let claims = TokenClaims {
            sub: account_id.into_uuid(),
            kind,
            iat,
            exp: iat.saturating_add(self.ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys(kind).encoding)
            .map_err(|e| AuthError::Internal(format!("Token encoding failed: {e}")))
    }

    pub fn verify(&self, kind: AccountKind, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_at(kind, token, Utc::now())
    }

    /// Verify against `now` as well as the wall clock
    pub fn verify_at(
        &self,
        kind: AccountKind,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenClaims, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.keys(kind).decoding, &self.validation)?
            .claims;

        if claims.kind != kind {
            return Err(TokenError::WrongKind);
        }

        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("keys", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
