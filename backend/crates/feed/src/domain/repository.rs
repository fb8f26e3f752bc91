//! Repository Traits
//!
//! Interfaces for post persistence and image resources. Implementations
//! live in the infrastructure layer.

use kernel::id::PostId;

use crate::domain::entity::post::Post;
use crate::error::FeedResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> FeedResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> FeedResult<Option<Post>>;

    /// Persist title, content, image and updated_at
    async fn update(&self, post: &Post) -> FeedResult<()>;

    /// Delete a post, returning whether it existed
    async fn delete(&self, post_id: &PostId) -> FeedResult<bool>;

    /// Count all posts
    async fn count(&self) -> FeedResult<u64>;

    /// Newest first, ties broken by id descending
    async fn list_page(&self, offset: u64, limit: u64) -> FeedResult<Vec<Post>>;
}

/// Storage for post image resources
#[trait_variant::make(ImageStore: Send)]
pub trait LocalImageStore {
    /// Remove the resource behind an image reference
    async fn remove(&self, image_ref: &str) -> FeedResult<()>;
}
