//! Account Entity
//!
//! An account owns its credentials, a free-text status and the ordered
//! list of posts it created.

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, PostId};
use platform::password::HashedPassword;
use serde::Serialize;

use crate::domain::value_object::{account_status::AccountStatus, email::Email};

/// Account entity
///
/// The password hash is set once at signup and never leaves this type
/// except for storage.
#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    /// Unique across accounts
    pub email: Email,
    /// Display name
    pub name: String,
    pub password_hash: HashedPassword,
    pub status: AccountStatus,
    /// Owned posts, in creation order
    pub posts: Vec<PostId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with the default status and no posts
    pub fn new(email: Email, name: impl Into<String>, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            email,
            name: name.into(),
            password_hash,
            status: AccountStatus::default(),
            posts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the status line
    pub fn set_status(&mut self, status: AccountStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Append a post reference; a reference already held is not duplicated
    pub fn attach_post(&mut self, post_id: PostId) {
        if !self.owns(&post_id) {
            self.posts.push(post_id);
            self.updated_at = Utc::now();
        }
    }

    /// Remove a post reference, returning whether it was held
    pub fn detach_post(&mut self, post_id: &PostId) -> bool {
        let before = self.posts.len();
        self.posts.retain(|id| id != post_id);
        let removed = self.posts.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    pub fn owns(&self, post_id: &PostId) -> bool {
        self.posts.contains(post_id)
    }

    /// Non-secret projection returned to callers
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            account_id: self.account_id,
            email: self.email.clone(),
            name: self.name.clone(),
            status: self.status.clone(),
            posts: self.posts.clone(),
        }
    }
}

/// Account view without credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    #[serde(rename = "_id")]
    pub account_id: AccountId,
    pub email: Email,
    pub name: String,
    pub status: AccountStatus,
    pub posts: Vec<PostId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::{ClearTextPassword, MIN_COST, PasswordHasher};

    fn account() -> Account {
        let hash = PasswordHasher::new(MIN_COST)
            .unwrap()
            .hash(&ClearTextPassword::new("secret".to_string()))
            .unwrap();
        Account::new(Email::new("a@x.io").unwrap(), "A", hash)
    }

    #[test]
    fn test_new_account_defaults() {
        let account = account();
        assert_eq!(account.status.as_str(), "I am new!");
        assert!(account.posts.is_empty());
        assert_eq!(account.created_at, account.updated_at);
    }

    #[test]
    fn test_attach_and_detach_preserve_order() {
        let mut account = account();
        let (p1, p2, p3) = (PostId::new(), PostId::new(), PostId::new());
        account.attach_post(p1);
        account.attach_post(p2);
        account.attach_post(p3);
        account.attach_post(p2);
        assert_eq!(account.posts, vec![p1, p2, p3]);

        assert!(account.detach_post(&p2));
        assert!(!account.detach_post(&p2));
        assert_eq!(account.posts, vec![p1, p3]);
    }

    #[test]
    fn test_profile_has_no_credentials() {
        let account = account();
        let json = serde_json::to_value(account.profile()).unwrap();
        assert_eq!(json["_id"], account.account_id.to_string());
        assert_eq!(json["status"], "I am new!");
        assert!(json.get("passwordHash").is_none());
        assert!(!json.to_string().contains(account.password_hash.as_str()));
    }
}
