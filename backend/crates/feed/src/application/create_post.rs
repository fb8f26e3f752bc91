//! Create Post Use Case

use std::sync::Arc;

use auth::domain::repository::AccountRepository;
use auth::{CallContext, require_authenticated};

use crate::application::details::{PostDetails, with_creator};
use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::validation::validate_post;
use crate::error::{FeedError, FeedResult};

pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

pub struct CreatePostUseCase<P, A>
where
    P: PostRepository,
    A: AccountRepository,
{
    posts: Arc<P>,
    accounts: Arc<A>,
}

impl<P, A> CreatePostUseCase<P, A>
where
    P: PostRepository,
    A: AccountRepository,
{
    pub fn new(posts: Arc<P>, accounts: Arc<A>) -> Self {
        Self { posts, accounts }
    }

    pub async fn execute(&self, ctx: &CallContext, input: CreatePostInput) -> FeedResult<PostDetails> {
        let identity = require_authenticated(ctx)?;

        let errors = validate_post(&input.title, &input.content);
        if !errors.is_empty() {
            return Err(FeedError::Validation(errors));
        }

        let account = self
            .accounts
            .find_by_id(&identity.account_id)
            .await?
            .ok_or(FeedError::InvalidUser)?;

        let post = Post::new(input.title, input.content, input.image_url, account.account_id);
        self.posts.create(&post).await?;

        if let Err(e) = self
            .accounts
            .attach_post(&account.account_id, &post.post_id)
            .await
        {
            tracing::error!(
                post_id = %post.post_id,
                account_id = %account.account_id,
                error = %e,
                "Attaching post to owner failed, removing post"
            );
            if let Err(undo) = self.posts.delete(&post.post_id).await {
                tracing::error!(
                    post_id = %post.post_id,
                    account_id = %account.account_id,
                    error = %undo,
                    "Compensating post delete failed"
                );
            }
            return Err(FeedError::Internal(format!("attaching post failed: {e}")));
        }

        tracing::info!(post_id = %post.post_id, account_id = %account.account_id, "Post created");

        with_creator(self.accounts.as_ref(), post).await
    }
}
