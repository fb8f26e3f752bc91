//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, PostId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::{FeedError, FeedResult};

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Postgres takes BIGINT for LIMIT/OFFSET
fn to_bigint(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> FeedResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                title,
                content,
                image_url,
                creator_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.image_url.as_deref())
        .bind(post.creator_id.as_uuid())
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> FeedResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                title,
                content,
                image_url,
                creator_id,
                created_at,
                updated_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn update(&self, post: &Post) -> FeedResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, content = $3, image_url = $4, updated_at = $5
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.image_url.as_deref())
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(FeedError::PostNotFound);
        }

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> FeedResult<bool> {
        let deleted = sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn count(&self) -> FeedResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn list_page(&self, offset: u64, limit: u64) -> FeedResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                title,
                content,
                image_url,
                creator_id,
                created_at,
                updated_at
            FROM posts
            ORDER BY created_at DESC, post_id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(to_bigint(limit))
        .bind(to_bigint(offset))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    title: String,
    content: String,
    image_url: Option<String>,
    creator_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            title: self.title,
            content: self.content,
            image_url: self.image_url,
            creator_id: AccountId::from_uuid(self.creator_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
