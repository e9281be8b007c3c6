//! Account Router
//!
//! Mounted once per kind, under `/api/v1/user` and `/api/v1/seller`.

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_kind::AccountKind;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::{AuthGate, require_principal};

/// Create the account router with PostgreSQL repository
pub fn account_router(
    kind: AccountKind,
    repo: PgAccountRepository,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenIssuer>,
) -> Router {
    account_router_generic(kind, repo, config, tokens)
}

/// Create a generic account router for any repository implementation
pub fn account_router_generic<R>(
    kind: AccountKind,
    repo: R,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenIssuer>,
) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGate::new(kind, tokens.clone());

    let state = AccountAppState {
        kind,
        repo: Arc::new(repo),
        config,
        tokens,
    };

    let protected = Router::new()
        .route("/profile", get(handlers::profile::<R>))
        .route("/editProfile", patch(handlers::edit_profile::<R>))
        .route("/delete", post(handlers::delete_account::<R>))
        .route_layer(middleware::from_fn_with_state(gate, require_principal));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
