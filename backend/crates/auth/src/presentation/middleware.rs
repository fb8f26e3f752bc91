//! Auth Gate Middleware
//!
//! Resolves the call context from `Authorization: Bearer <token>` and
//! stores it in request extensions. The gate never rejects a request;
//! protected operations check the context themselves.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::{BearerAbsence, extract_bearer};

use crate::application::AuthenticateUseCase;
use crate::application::token::TokenService;
use crate::domain::identity::CallContext;

/// Middleware attaching a `CallContext` to every request
pub async fn auth_gate(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = match extract_bearer(req.headers()) {
        Ok(token) => Some(token.to_owned()),
        Err(BearerAbsence::Missing) => None,
        Err(reason) => {
            tracing::debug!(?reason, "Unusable authorization header");
            None
        }
    };

    let ctx = AuthenticateUseCase::new(tokens).execute(token.as_deref());
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

/// Reads the context set by [`auth_gate`]; anonymous when the gate did not run
impl<S> FromRequestParts<S> for CallContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<CallContext>()
            .cloned()
            .unwrap_or_default())
    }
}
