//! Delete Post Use Case
//!
//! Detaches the post from its owner, deletes it, then removes its image
//! in the background. A failed delete re-attaches the reference.

use std::sync::Arc;

use auth::domain::repository::AccountRepository;
use auth::{CallContext, require_authenticated, require_owner};

use crate::application::cleanup::schedule_image_removal;
use crate::application::details::{fetch_post, parse_id};
use crate::domain::repository::{ImageStore, PostRepository};
use crate::error::{FeedError, FeedResult};

pub struct DeletePostUseCase<P, A, I>
where
    P: PostRepository,
    A: AccountRepository,
    I: ImageStore + Send + Sync + 'static,
{
    posts: Arc<P>,
    accounts: Arc<A>,
    images: Arc<I>,
}

impl<P, A, I> DeletePostUseCase<P, A, I>
where
    P: PostRepository,
    A: AccountRepository,
    I: ImageStore + Send + Sync + 'static,
{
    pub fn new(posts: Arc<P>, accounts: Arc<A>, images: Arc<I>) -> Self {
        Self {
            posts,
            accounts,
            images,
        }
    }

    pub async fn execute(&self, ctx: &CallContext, post_id: &str) -> FeedResult<()> {
        let identity = require_authenticated(ctx)?;

        let post_id = parse_id(post_id)?;
        let post = fetch_post(self.posts.as_ref(), post_id).await?;
        require_owner(identity, &post.creator_id)?;

        self.accounts
            .detach_post(&post.creator_id, &post.post_id)
            .await?;

        if let Err(e) = self.posts.delete(&post.post_id).await {
            tracing::error!(
                post_id = %post.post_id,
                account_id = %post.creator_id,
                error = %e,
                "Deleting post failed, re-attaching to owner"
            );
            if let Err(undo) = self
                .accounts
                .attach_post(&post.creator_id, &post.post_id)
                .await
            {
                tracing::error!(
                    post_id = %post.post_id,
                    account_id = %post.creator_id,
                    error = %undo,
                    "Compensating re-attach failed"
                );
            }
            return Err(FeedError::Internal(format!("deleting post failed: {e}")));
        }

        if let Some(image) = post.image_url {
            schedule_image_removal(self.images.clone(), image);
        }

        tracing::info!(post_id = %post.post_id, account_id = %post.creator_id, "Post deleted");

        Ok(())
    }
}
