//! Authorization Gate
//!
//! One gate per account kind. It reads the bearer token, verifies it
//! against that kind's secret and attaches a [`Principal`] to the request.
//!
//! ```text
//! no usable header   -> 401 "Authentication token is missing"
//! verification fails -> 401 "You are not authorized to access this route"
//! ok                 -> Principal in request extensions, continue
//! ```

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;

use crate::application::token::TokenIssuer;
use crate::domain::value_object::{account_id::AccountId, account_kind::AccountKind};
use crate::error::{AuthError, AuthResult};

/// The authenticated identity of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub account_id: AccountId,
    pub kind: AccountKind,
}

#[derive(Clone)]
pub struct AuthGate {
    kind: AccountKind,
    tokens: Arc<TokenIssuer>,
}

impl AuthGate {
    pub fn new(kind: AccountKind, tokens: Arc<TokenIssuer>) -> Self {
        Self { kind, tokens }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn authorize(&self, headers: &HeaderMap) -> AuthResult<Principal> {
        let token = extract_bearer(headers)?;

        let claims = self.tokens.verify(self.kind, token).map_err(|e| {
            tracing::debug!(kind = %self.kind, reason = %e, "Token rejected");
            AuthError::from(e)
        })?;

        Ok(Principal {
            account_id: claims.account_id(),
            kind: claims.kind,
        })
    }
}

/// Middleware for `route_layer(from_fn_with_state(gate, require_principal))`
pub async fn require_principal(
    State(gate): State<AuthGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let principal = gate.authorize(req.headers())?;
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present behind `require_principal`
        parts
            .extensions
            .get::<Principal>()
            .copied()
            .ok_or(AuthError::TokenMissing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use axum::http::{HeaderValue, header};

    fn gates() -> (AuthGate, AuthGate, Arc<TokenIssuer>) {
        let tokens = Arc::new(TokenIssuer::new(&AuthConfig::development()));
        (
            AuthGate::new(AccountKind::Buyer, tokens.clone()),
            AuthGate::new(AccountKind::Seller, tokens.clone()),
            tokens,
        )
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_missing_header_is_token_missing() {
        let (buyer, _, _) = gates();
        let err = buyer.authorize(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, AuthError::TokenMissing));
    }

    #[test]
    fn test_non_bearer_is_token_missing() {
        let (buyer, _, _) = gates();
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(matches!(
            buyer.authorize(&headers).unwrap_err(),
            AuthError::TokenMissing
        ));
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        let (buyer, _, _) = gates();
        assert!(matches!(
            buyer.authorize(&bearer("garbage")).unwrap_err(),
            AuthError::Unauthorized
        ));
    }

    #[test]
    fn test_principal_for_matching_kind_only() {
        let (buyer, seller, tokens) = gates();
        let id = AccountId::new();
        let token = tokens.issue(AccountKind::Buyer, &id).unwrap();

        let principal = buyer.authorize(&bearer(&token)).unwrap();
        assert_eq!(principal.account_id, id);
        assert_eq!(principal.kind, AccountKind::Buyer);

        assert!(matches!(
            seller.authorize(&bearer(&token)).unwrap_err(),
            AuthError::Unauthorized
        ));
    }
}
