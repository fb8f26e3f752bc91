//! Sign Up Use Case
//!
//! Creates a new account.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword, PasswordHasher};

use crate::application::config::AuthConfig;
use crate::domain::entity::account::{Account, AccountProfile};
use crate::domain::repository::AccountRepository;
use crate::domain::validation::validate_signup;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub account: AccountProfile,
}

/// Sign up use case
pub struct SignUpUseCase<A>
where
    A: AccountRepository,
{
    accounts: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> SignUpUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(accounts: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { accounts, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let errors = validate_signup(&input.email, &input.password);
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        let email = Email::new(input.email)?;

        // The unique index still guards the race between this check and the insert
        if self.accounts.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = ClearTextPassword::new(input.password);
        let password_hash = hash_password(self.config.password_hasher, password).await?;

        let account = Account::new(email, input.name, password_hash);
        self.accounts.create(&account).await?;

        tracing::info!(account_id = %account.account_id, "Account signed up");

        Ok(SignUpOutput {
            account: account.profile(),
        })
    }
}

/// Hash on the blocking pool
async fn hash_password(
    hasher: PasswordHasher,
    password: ClearTextPassword,
) -> AuthResult<HashedPassword> {
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))?
        .map_err(|e| AuthError::Internal(e.to_string()))
}
