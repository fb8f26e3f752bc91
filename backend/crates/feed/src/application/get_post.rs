//! Get Post Use Case

use std::sync::Arc;

use auth::domain::repository::AccountRepository;
use auth::{CallContext, require_authenticated};

use crate::application::details::{PostDetails, fetch_post, parse_id, with_creator};
use crate::domain::repository::PostRepository;
use crate::error::FeedResult;

pub struct GetPostUseCase<P, A>
where
    P: PostRepository,
    A: AccountRepository,
{
    posts: Arc<P>,
    accounts: Arc<A>,
}

impl<P, A> GetPostUseCase<P, A>
where
    P: PostRepository,
    A: AccountRepository,
{
    pub fn new(posts: Arc<P>, accounts: Arc<A>) -> Self {
        Self { posts, accounts }
    }

    pub async fn execute(&self, ctx: &CallContext, post_id: &str) -> FeedResult<PostDetails> {
        require_authenticated(ctx)?;

        let post_id = parse_id(post_id)?;
        let post = fetch_post(self.posts.as_ref(), post_id).await?;

        with_creator(self.accounts.as_ref(), post).await
    }
}
