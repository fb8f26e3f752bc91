//! Router assembly

use axum::Router;

use auth::domain::repository::AccountRepository;
use auth::presentation::router::auth_router_generic;
use feed::domain::repository::{ImageStore, PostRepository};

use crate::ops::ops_router;
use crate::state::AppState;

/// REST auth routes under `/api/auth` plus the operation surface at `/api/ops`
pub fn build_app<A, P, I>(state: AppState<A, P, I>) -> Router
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    Router::new()
        .nest("/api/auth", auth_router_generic(state.auth_state()))
        .merge(ops_router(state))
}
