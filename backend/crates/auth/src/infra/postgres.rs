//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, PostId};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_status::AccountStatus, email::Email};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_posts(&self, account_id: Uuid) -> AuthResult<Vec<PostId>> {
        let ids: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT post_id
            FROM account_posts
            WHERE account_id = $1
            ORDER BY position
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().map(PostId::from_uuid).collect())
    }

    async fn hydrate(&self, row: Option<AccountRow>) -> AuthResult<Option<Account>> {
        let Some(row) = row else {
            return Ok(None);
        };
        let posts = self.load_posts(row.account_id).await?;
        row.into_account(posts).map(Some)
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                email,
                name,
                password_hash,
                status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.email.as_str())
        .bind(&account.name)
        .bind(account.password_hash.as_str())
        .bind(account.status.as_str())
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AuthError::EmailTaken,
            _ => AuthError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                name,
                password_hash,
                status,
                created_at,
                updated_at
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        self.hydrate(row).await
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                name,
                password_hash,
                status,
                created_at,
                updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        self.hydrate(row).await
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET status = $2, updated_at = $3
            WHERE account_id = $1
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.status.as_str())
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AuthError::AccountNotFound);
        }

        Ok(())
    }

    async fn attach_post(&self, account_id: &AccountId, post_id: &PostId) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO account_posts (account_id, post_id)
            VALUES ($1, $2)
            ON CONFLICT (account_id, post_id) DO NOTHING
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(post_id.as_uuid())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // Missing account row
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(AuthError::AccountNotFound)
            }
            Err(e) => Err(AuthError::Database(e)),
        }
    }

    async fn detach_post(&self, account_id: &AccountId, post_id: &PostId) -> AuthResult<()> {
        sqlx::query("DELETE FROM account_posts WHERE account_id = $1 AND post_id = $2")
            .bind(account_id.as_uuid())
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    email: String,
    name: String,
    password_hash: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self, posts: Vec<PostId>) -> AuthResult<Account> {
        let password_hash = HashedPassword::from_stored(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password_hash: {}", e)))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            email: Email::from_db(self.email),
            name: self.name,
            password_hash,
            status: AccountStatus::from_db(self.status),
            posts,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
