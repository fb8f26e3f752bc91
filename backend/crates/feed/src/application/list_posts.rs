//! List Posts Use Case

use std::sync::Arc;

use auth::domain::repository::AccountRepository;
use auth::{CallContext, require_authenticated};

use crate::application::details::{PostDetails, with_creator};
use crate::domain::page::PageRequest;
use crate::domain::repository::PostRepository;
use crate::error::FeedResult;

#[derive(Debug)]
pub struct ListPostsOutput {
    pub posts: Vec<PostDetails>,
    /// Count across all pages
    pub total_posts: u64,
}

pub struct ListPostsUseCase<P, A>
where
    P: PostRepository,
    A: AccountRepository,
{
    posts: Arc<P>,
    accounts: Arc<A>,
}

impl<P, A> ListPostsUseCase<P, A>
where
    P: PostRepository,
    A: AccountRepository,
{
    pub fn new(posts: Arc<P>, accounts: Arc<A>) -> Self {
        Self { posts, accounts }
    }

    pub async fn execute(&self, ctx: &CallContext, page: Option<i64>) -> FeedResult<ListPostsOutput> {
        require_authenticated(ctx)?;

        let page = PageRequest::new(page);
        let total_posts = self.posts.count().await?;
        let rows = self.posts.list_page(page.offset(), page.limit()).await?;

        let mut posts = Vec::with_capacity(rows.len());
        for post in rows {
            posts.push(with_creator(self.accounts.as_ref(), post).await?);
        }

        Ok(ListPostsOutput { posts, total_posts })
    }
}
