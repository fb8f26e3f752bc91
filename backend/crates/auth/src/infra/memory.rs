//! In-Memory Repository Implementation
//!
//! Backs tests and local runs without a database. Enforces the same email
//! uniqueness as the unique index.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{AccountId, PostId};
use tokio::sync::RwLock;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;
        if accounts.values().any(|a| a.email == account.email) {
            return Err(AuthError::EmailTaken);
        }
        accounts.insert(account.account_id, account.clone());
        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        Ok(self.accounts.read().await.get(account_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| &a.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.accounts.read().await.values().any(|a| &a.email == email))
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .get_mut(&account.account_id)
            .ok_or(AuthError::AccountNotFound)?;
        stored.status = account.status.clone();
        stored.updated_at = account.updated_at;
        Ok(())
    }

    async fn attach_post(&self, account_id: &AccountId, post_id: &PostId) -> AuthResult<()> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(account_id)
            .ok_or(AuthError::AccountNotFound)?;
        account.attach_post(*post_id);
        Ok(())
    }

    async fn detach_post(&self, account_id: &AccountId, post_id: &PostId) -> AuthResult<()> {
        if let Some(account) = self.accounts.write().await.get_mut(account_id) {
            account.detach_post(post_id);
        }
        Ok(())
    }
}
