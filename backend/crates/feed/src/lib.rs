//! Feed (Posts) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, pagination, validation, repository and image store traits
//! - `application/` - Post use cases (create, list, get, update, delete)
//! - `infra/` - PostgreSQL, in-memory and filesystem implementations
//! - `presentation/` - Response DTOs
//!
//! Every operation requires an authenticated caller; mutations also
//! require that the caller created the post. Writes that touch both a
//! post and its owner's collection are ordered and compensated on failure.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::page::PAGE_SIZE;
pub use error::{FeedError, FeedResult};
pub use infra::image_store::FsImageStore;
pub use infra::memory::InMemoryPostRepository;
pub use infra::postgres::PgPostRepository;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}
