//! Domain Layer
//!
//! Contains entities, value objects, identity context, policy checks,
//! validators, and repository traits.

pub mod entity;
pub mod identity;
pub mod policy;
pub mod repository;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::account::{Account, AccountProfile};
pub use identity::{CallContext, Identity};
pub use repository::AccountRepository;
