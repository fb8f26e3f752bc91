//! Post lookups shared by the use cases

use auth::domain::repository::AccountRepository;
use kernel::id::{AccountId, PostId};

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::validation::parse_post_id;
use crate::error::{FeedError, FeedResult};

/// Creator fields shown alongside a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorSummary {
    pub account_id: AccountId,
    pub name: String,
}

/// A post with its creator resolved
#[derive(Debug, Clone)]
pub struct PostDetails {
    pub post: Post,
    /// `None` when the creator account no longer exists
    pub creator: Option<CreatorSummary>,
}

pub(crate) async fn with_creator<A>(accounts: &A, post: Post) -> FeedResult<PostDetails>
where
    A: AccountRepository,
{
    let creator = accounts
        .find_by_id(&post.creator_id)
        .await?
        .map(|account| CreatorSummary {
            account_id: account.account_id,
            name: account.name,
        });

    Ok(PostDetails { post, creator })
}

/// Empty ids fail validation; malformed ids parse to `None`
pub(crate) fn parse_id(raw: &str) -> FeedResult<Option<PostId>> {
    parse_post_id(raw).map_err(FeedError::Validation)
}

pub(crate) async fn fetch_post<P>(posts: &P, post_id: Option<PostId>) -> FeedResult<Post>
where
    P: PostRepository,
{
    let Some(post_id) = post_id else {
        return Err(FeedError::PostNotFound);
    };

    posts
        .find_by_id(&post_id)
        .await?
        .ok_or(FeedError::PostNotFound)
}
