//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::auth_gate;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAccountRepository, config: AuthConfig) -> Router {
    auth_router_generic(AuthAppState::new(repo, config))
}

/// Create a generic Auth router for any repository implementation
///
/// Every route runs behind the auth gate.
pub fn auth_router_generic<R>(state: AuthAppState<R>) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let tokens = state.tokens.clone();

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::login::<R>))
        .route(
            "/status",
            get(handlers::get_status::<R>)
                .patch(handlers::update_status::<R>)
                .put(handlers::update_status::<R>),
        )
        .layer(middleware::from_fn_with_state(tokens, auth_gate))
        .with_state(state)
}
