//! Update Post Use Case

use std::sync::Arc;

use auth::domain::repository::AccountRepository;
use auth::{CallContext, require_authenticated, require_owner};

use crate::application::cleanup::schedule_image_removal;
use crate::application::details::{PostDetails, fetch_post, parse_id, with_creator};
use crate::domain::entity::post::ImageChange;
use crate::domain::repository::{ImageStore, PostRepository};
use crate::domain::validation::validate_post;
use crate::error::{FeedError, FeedResult};

pub struct UpdatePostInput {
    pub title: String,
    pub content: String,
    /// Absent or `"undefined"` keeps the current image
    pub image_url: Option<String>,
}

pub struct UpdatePostUseCase<P, A, I>
where
    P: PostRepository,
    A: AccountRepository,
    I: ImageStore + Send + Sync + 'static,
{
    posts: Arc<P>,
    accounts: Arc<A>,
    images: Arc<I>,
}

impl<P, A, I> UpdatePostUseCase<P, A, I>
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

    pub async fn execute(
        &self,
        ctx: &CallContext,
        post_id: &str,
        input: UpdatePostInput,
    ) -> FeedResult<PostDetails> {
        let identity = require_authenticated(ctx)?;

        let post_id = parse_id(post_id)?;
        let errors = validate_post(&input.title, &input.content);
        if !errors.is_empty() {
            return Err(FeedError::Validation(errors));
        }

        let mut post = fetch_post(self.posts.as_ref(), post_id).await?;
        require_owner(identity, &post.creator_id)?;

        let replaced = post.revise(
            input.title,
            input.content,
            ImageChange::from_input(input.image_url),
        );
        self.posts.update(&post).await?;

        if let Some(old_image) = replaced {
            schedule_image_removal(self.images.clone(), old_image);
        }

        tracing::info!(post_id = %post.post_id, "Post updated");

        with_creator(self.accounts.as_ref(), post).await
    }
}
