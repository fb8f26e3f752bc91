//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{LoginInput, LoginUseCase, SignUpInput, SignUpUseCase, StatusUseCase};
use crate::domain::identity::CallContext;
use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, MessageResponse, SignUpRequest, SignUpResponse, StatusResponse,
    UpdateStatusRequest,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

impl<R> AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        let tokens = Arc::new(config.token_service());
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            tokens,
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<(StatusCode, Json<SignUpResponse>)>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        email: req.email,
        password: req.password,
        name: req.name,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "User created!".to_string(),
            user_id: output.account.account_id.to_string(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        user_id: output.account_id.to_string(),
    }))
}

// ============================================================================
// Status
// ============================================================================

/// GET /api/auth/status
pub async fn get_status<R>(
    State(state): State<AuthAppState<R>>,
    ctx: CallContext,
) -> AuthResult<Json<StatusResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let account = StatusUseCase::new(state.repo.clone()).get(&ctx).await?;

    Ok(Json(StatusResponse {
        message: "Status fetched successfully!".to_string(),
        status: account.status.into_db(),
    }))
}

/// PATCH /api/auth/status
pub async fn update_status<R>(
    State(state): State<AuthAppState<R>>,
    ctx: CallContext,
    Json(req): Json<UpdateStatusRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    StatusUseCase::new(state.repo.clone())
        .update(&ctx, req.status)
        .await?;

    Ok(Json(MessageResponse {
        message: "User status updated!".to_string(),
    }))
}
