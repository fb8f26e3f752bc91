//! Login Use Case
//!
//! Verifies credentials and issues a session token.
//!
//! ## Security
//! - Unknown email and wrong password produce the same error and both
//!   run one bcrypt verify
//! - Input that fails the shape checks is also reported as a failed login

use std::sync::Arc;

use kernel::id::AccountId;
use platform::password::{ClearTextPassword, HashedPassword, PasswordHasher, PasswordVerifier};

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::identity::Identity;
use crate::domain::repository::AccountRepository;
use crate::domain::validation::validate_login;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub account_id: AccountId,
    /// Token expiry, seconds since the epoch
    pub expires_at: i64,
}

/// Login use case
///
/// `V` performs the password check; it defaults to the configured bcrypt
/// hasher.
pub struct LoginUseCase<A, V = PasswordHasher>
where
    A: AccountRepository,
    V: PasswordVerifier,
{
    accounts: Arc<A>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
    verifier: V,
}

impl<A> LoginUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(accounts: Arc<A>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        let verifier = config.password_hasher;
        Self {
            accounts,
            tokens,
            config,
            verifier,
        }
    }
}

impl<A, V> LoginUseCase<A, V>
where
    A: AccountRepository,
    V: PasswordVerifier,
{
    pub fn with_verifier<W: PasswordVerifier>(self, verifier: W) -> LoginUseCase<A, W> {
        LoginUseCase {
            accounts: self.accounts,
            tokens: self.tokens,
            config: self.config,
            verifier,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let errors = validate_login(&input.email, &input.password);
        if !errors.is_empty() {
            return Err(AuthError::LoginRejected(errors));
        }

        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let password = ClearTextPassword::new(input.password);

        let Some(account) = self.accounts.find_by_email(&email).await? else {
            // Same bcrypt work as a wrong password
            let decoy = self.config.decoy_hash().clone();
            verify_password(self.verifier.clone(), decoy, password).await?;
            tracing::warn!("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(self.verifier.clone(), account.password_hash.clone(), password).await? {
            tracing::warn!(account_id = %account.account_id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let identity = Identity {
            account_id: account.account_id,
            email: account.email,
        };
        let issued = self
            .tokens
            .issue(&identity)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(account_id = %identity.account_id, "Account logged in");

        Ok(LoginOutput {
            token: issued.token,
            account_id: identity.account_id,
            expires_at: issued.claims.exp,
        })
    }
}

/// Verify on the blocking pool
async fn verify_password<V: PasswordVerifier>(
    verifier: V,
    hash: HashedPassword,
    password: ClearTextPassword,
) -> AuthResult<bool> {
    tokio::task::spawn_blocking(move || verifier.verify(&hash, &password))
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {e}")))
}
