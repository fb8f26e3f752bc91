//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::{CreatorSummary, ListPostsOutput, PostDetails};

/// Post creator
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl From<CreatorSummary> for CreatorResponse {
    fn from(creator: CreatorSummary) -> Self {
        Self {
            id: creator.account_id.to_string(),
            name: creator.name,
        }
    }
}

/// Post view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub creator: Option<CreatorResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostDetails> for PostResponse {
    fn from(details: PostDetails) -> Self {
        let post = details.post;
        Self {
            id: post.post_id.to_string(),
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            creator: details.creator.map(CreatorResponse::from),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// One page of posts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsPageResponse {
    pub posts: Vec<PostResponse>,
    pub total_posts: u64,
}

impl From<ListPostsOutput> for PostsPageResponse {
    fn from(output: ListPostsOutput) -> Self {
        Self {
            posts: output.posts.into_iter().map(PostResponse::from).collect(),
            total_posts: output.total_posts,
        }
    }
}
