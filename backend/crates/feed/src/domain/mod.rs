//! Domain Layer
//!
//! Contains the post entity, pagination, validators, and persistence
//! traits.

pub mod entity;
pub mod page;
pub mod repository;
pub mod validation;

// Re-exports
pub use entity::post::{ImageChange, Post};
pub use page::PageRequest;
pub use repository::{ImageStore, PostRepository};
