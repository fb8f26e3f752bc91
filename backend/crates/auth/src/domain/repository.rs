//! Repository Traits
//!
//! Interfaces for account persistence. Implementations live in the
//! infrastructure layer.

use kernel::id::{AccountId, PostId};

use crate::domain::entity::account::Account;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account; a taken email yields `AuthError::EmailTaken`
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Find account by ID, with its post references in order
    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Find account by exact email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Persist mutable scalar fields (status, updated_at)
    async fn update(&self, account: &Account) -> AuthResult<()>;

    /// Append a post reference to the account's collection
    async fn attach_post(&self, account_id: &AccountId, post_id: &PostId) -> AuthResult<()>;

    /// Remove a post reference; removing a reference not held is not an error
    async fn detach_post(&self, account_id: &AccountId, post_id: &PostId) -> AuthResult<()>;
}
