//! Auth (Authentication & Authorization) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Accounts, identity context, policy, validation, repository traits
//! - `application/` - Token service and account use cases
//! - `infra/` - PostgreSQL and in-memory repository implementations
//! - `presentation/` - REST handlers, DTOs, router, auth gate middleware
//!
//! ## Features
//! - Account signup/login with email + password
//! - Stateless signed session tokens (HS256 JWT, 1 hour default)
//! - Free-text account status, readable and writable by its owner
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (cost 12 by default)
//! - The auth gate never rejects; each operation checks the call context
//! - Unknown email and wrong password are indistinguishable to the caller
//! - The signing secret comes from configuration and is never logged

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{TokenError, TokenService};
pub use domain::identity::{CallContext, Identity};
pub use domain::policy::{PolicyViolation, require_authenticated, require_owner};
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryAccountRepository;
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
