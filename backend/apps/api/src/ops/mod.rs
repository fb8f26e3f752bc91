//! Operation Surface
//!
//! A single `POST /api/ops` endpoint taking `{"operation", "args"}` and
//! answering with `{"data"}` or `{"errors"}`. Operation failures are
//! reported with HTTP 200; only unreadable requests get a 400.

pub mod dispatch;
pub mod envelope;
pub mod request;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Json, Router, middleware, routing::post};
use serde_json::Value;

use auth::CallContext;
use auth::domain::repository::AccountRepository;
use auth::middleware::auth_gate;
use feed::domain::repository::{ImageStore, PostRepository};

use crate::state::AppState;
use envelope::{DataEnvelope, OpsError};
use request::{Operation, OpsRequest};

pub fn ops_router<A, P, I>(state: AppState<A, P, I>) -> Router
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let tokens = state.tokens.clone();

    Router::new()
        .route("/api/ops", post(execute::<A, P, I>))
        .layer(middleware::from_fn_with_state(tokens, auth_gate))
        .with_state(state)
}

/// POST /api/ops
async fn execute<A, P, I>(
    State(state): State<AppState<A, P, I>>,
    ctx: CallContext,
    body: Result<Json<OpsRequest>, JsonRejection>,
) -> Result<Json<DataEnvelope<Value>>, OpsError>
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let Json(request) = body.map_err(|rejection| OpsError::MalformedBody(rejection.body_text()))?;
    let operation = Operation::parse(request)?;

    tracing::debug!(
        operation = operation.name(),
        authenticated = ctx.is_authenticated(),
        "Executing operation"
    );

    let data = dispatch::dispatch(&state, &ctx, operation)
        .await
        .map_err(OpsError::Failed)?;

    Ok(Json(DataEnvelope { data }))
}
