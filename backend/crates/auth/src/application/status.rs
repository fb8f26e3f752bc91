//! Status Use Case
//!
//! Read and update the caller's own status line.

use std::sync::Arc;

use crate::domain::entity::account::Account;
use crate::domain::identity::CallContext;
use crate::domain::policy::require_authenticated;
use crate::domain::repository::AccountRepository;
use crate::domain::validation::validate_status;
use crate::domain::value_object::account_status::AccountStatus;
use crate::error::{AuthError, AuthResult};

pub struct StatusUseCase<A>
where
    A: AccountRepository,
{
    accounts: Arc<A>,
}

impl<A> StatusUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    /// Load the caller's account
    pub async fn get(&self, ctx: &CallContext) -> AuthResult<Account> {
        let identity = require_authenticated(ctx).map_err(|_| AuthError::Unauthenticated)?;

        self.accounts
            .find_by_id(&identity.account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)
    }

    /// Replace the caller's status, returning the stored value
    pub async fn update(&self, ctx: &CallContext, status: String) -> AuthResult<AccountStatus> {
        let identity = require_authenticated(ctx).map_err(|_| AuthError::Unauthenticated)?;

        let errors = validate_status(&status);
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }
        let status = AccountStatus::new(status)?;

        let mut account = self
            .accounts
            .find_by_id(&identity.account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        account.set_status(status);
        self.accounts.update(&account).await?;

        tracing::info!(account_id = %account.account_id, "Account status updated");

        Ok(account.status)
    }
}
