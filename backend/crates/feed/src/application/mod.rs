//! Application Layer
//!
//! Post use cases. Each one runs the same sequence: authentication,
//! input validation, existence lookups, ownership, then the writes.

pub mod cleanup;
pub mod create_post;
pub mod delete_post;
pub mod details;
pub mod get_post;
pub mod list_posts;
pub mod update_post;

// Re-exports
pub use cleanup::schedule_image_removal;
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use details::{CreatorSummary, PostDetails};
pub use get_post::GetPostUseCase;
pub use list_posts::{ListPostsOutput, ListPostsUseCase};
pub use update_post::{UpdatePostInput, UpdatePostUseCase};
