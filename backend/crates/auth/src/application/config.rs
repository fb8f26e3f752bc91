//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup
//! and shared read-only.

use std::time::Duration;

use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError, PasswordHasher};
use platform::secret::SigningSecret;

use crate::application::token::TokenService;

/// Default session token lifetime (1 hour)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Clear text behind the decoy hash
const DECOY_PASSWORD: &str = "no account uses this password";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Key for HS256 token signatures
    pub token_secret: SigningSecret,
    /// Session token lifetime
    pub token_ttl: Duration,
    /// bcrypt hasher (cost 12 by default)
    pub password_hasher: PasswordHasher,
    /// Verified in place of a real hash when the login email is unknown
    decoy_hash: HashedPassword,
}

impl AuthConfig {
    /// Create config, rejecting a bcrypt cost outside the supported range
    ///
    /// Hashes the decoy password once at the configured cost.
    pub fn new(
        token_secret: SigningSecret,
        token_ttl: Duration,
        bcrypt_cost: u32,
    ) -> Result<Self, PasswordHashError> {
        let password_hasher = PasswordHasher::new(bcrypt_cost)?;
        let decoy_hash =
            password_hasher.hash(&ClearTextPassword::new(DECOY_PASSWORD.to_string()))?;

        Ok(Self {
            token_secret,
            token_ttl,
            password_hasher,
            decoy_hash,
        })
    }

    /// Create config with a random signing secret (tests, local development)
    pub fn with_random_secret(bcrypt_cost: u32) -> Result<Self, PasswordHashError> {
        Self::new(SigningSecret::generate(), DEFAULT_TOKEN_TTL, bcrypt_cost)
    }

    /// Token service bound to this config's secret and ttl
    pub fn token_service(&self) -> TokenService {
        TokenService::new(&self.token_secret, self.token_ttl)
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl.as_secs()
    }

    pub fn decoy_hash(&self) -> &HashedPassword {
        &self.decoy_hash
    }
}
