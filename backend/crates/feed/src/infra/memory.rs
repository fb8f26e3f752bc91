//! In-Memory Repository Implementation

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::PostId;
use tokio::sync::RwLock;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::{FeedError, FeedResult};

#[derive(Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: &Post) -> FeedResult<()> {
        self.posts.write().await.insert(post.post_id, post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> FeedResult<Option<Post>> {
        Ok(self.posts.read().await.get(post_id).cloned())
    }

    async fn update(&self, post: &Post) -> FeedResult<()> {
        let mut posts = self.posts.write().await;
        let stored = posts.get_mut(&post.post_id).ok_or(FeedError::PostNotFound)?;
        *stored = post.clone();
        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> FeedResult<bool> {
        Ok(self.posts.write().await.remove(post_id).is_some())
    }

    async fn count(&self) -> FeedResult<u64> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn list_page(&self, offset: u64, limit: u64) -> FeedResult<Vec<Post>> {
        let posts = self.posts.read().await;
        let mut ordered: Vec<&Post> = posts.values().collect();
        ordered.sort_by_key(|p| Reverse((p.created_at, p.post_id)));

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(ordered
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}
