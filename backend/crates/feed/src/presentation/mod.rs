//! Presentation Layer
//!
//! Response DTOs for post results.

pub mod dto;

pub use dto::{CreatorResponse, PostResponse, PostsPageResponse};
