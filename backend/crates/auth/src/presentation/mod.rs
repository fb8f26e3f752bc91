//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the auth gate middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::auth_gate;
pub use router::{auth_router, auth_router_generic};
