//! HTTP Handlers
//!
//! One set of handlers serves both kinds; the kind comes from the state
//! the router was built with.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use platform::body::{BodyRejection, JsonBody};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::application::{
    DeleteAccountUseCase, EditProfileInput, EditProfileUseCase, LoginInput, LoginUseCase,
    ProfileUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_kind::AccountKind;
use crate::error::AuthResult;
use crate::presentation::dto::{
    EditProfileRequest, EditProfileResponse, LoginRequest, LoginResponse, MessageResponse,
    ProfileResponse, RegisterRequest,
};
use crate::presentation::middleware::Principal;

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub kind: AccountKind,
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenIssuer>,
}

// ============================================================================
// Register / Login
// ============================================================================

/// POST /api/v1/{kind}/register
pub async fn register<R>(
    State(state): State<AccountAppState<R>>,
    payload: Result<JsonBody<RegisterRequest>, BodyRejection>,
) -> AuthResult<(StatusCode, Json<MessageResponse>)>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let JsonBody(req) = payload?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        full_name: req.full_name,
        email: req.email,
        password: req.password,
    };

    use_case.execute(state.kind, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "{} registered successfully",
            state.kind.label()
        ))),
    ))
}

/// POST /api/v1/{kind}/login
pub async fn login<R>(
    State(state): State<AccountAppState<R>>,
    payload: Result<JsonBody<LoginRequest>, BodyRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let JsonBody(req) = payload?;

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let input = LoginInput {
        email: req.email,
        mobile: req.mobile,
        password: req.password,
    };

    let output = use_case.execute(state.kind, input).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: output.token,
    }))
}

// ============================================================================
// Protected
// ============================================================================

/// GET /api/v1/{kind}/profile
pub async fn profile<R>(
    State(state): State<AccountAppState<R>>,
    principal: Principal,
) -> AuthResult<Json<ProfileResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = ProfileUseCase::new(state.repo.clone());

    let output = use_case
        .execute(principal.kind, &principal.account_id)
        .await?;

    Ok(Json(output.into()))
}

/// PATCH /api/v1/{kind}/editProfile
pub async fn edit_profile<R>(
    State(state): State<AccountAppState<R>>,
    principal: Principal,
    payload: Result<JsonBody<EditProfileRequest>, BodyRejection>,
) -> AuthResult<Json<EditProfileResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let JsonBody(req) = payload?;

    let use_case = EditProfileUseCase::new(state.repo.clone(), state.config.clone());

    let input = EditProfileInput {
        full_name: req.full_name,
        email: req.email,
        mobile: req.mobile,
        address: req.address,
        password: req.password,
    };

    let output = use_case
        .execute(principal.kind, &principal.account_id, input)
        .await?;

    Ok(Json(EditProfileResponse {
        message: "Profile updated successfully".to_string(),
        profile: output.into(),
    }))
}

/// POST /api/v1/{kind}/delete
pub async fn delete_account<R>(
    State(state): State<AccountAppState<R>>,
    principal: Principal,
) -> AuthResult<Json<MessageResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteAccountUseCase::new(state.repo.clone());

    use_case
        .execute(principal.kind, &principal.account_id)
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "{} deleted successfully",
        state.kind.label()
    ))))
}
