//! Password Hashing and Verification
//!
//! One-way password handling with:
//! - bcrypt hashing with a per-call random salt embedded in the output
//! - Tunable work factor (cost), default 12
//! - Zeroization of clear text on drop
//!
//! ## Security Features
//! - The salt and cost are stored in the modular crypt string, so hashes
//!   created with an older cost still verify after the cost is raised
//! - Verification never errors; any mismatch or malformed hash is `false`

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Default bcrypt cost factor
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Smallest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Largest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Length of a bcrypt modular crypt string (`$2b$12$` + 53 chars)
const BCRYPT_HASH_LENGTH: usize = 60;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Cost factor outside what bcrypt supports
    #[error("bcrypt cost must be between {MIN_COST} and {MAX_COST} (got {0})")]
    CostOutOfRange(u32),

    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored value is not a bcrypt hash
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// Policy checks (length, emptiness) belong to the caller's validator; this
/// type only guards the bytes.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Compare against a stored value byte-for-byte (used by tests only)
    #[cfg(test)]
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// bcrypt hasher configured with a work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher, rejecting costs bcrypt would refuse at hash time
    pub fn new(cost: u32) -> Result<Self, PasswordHashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordHashError::CostOutOfRange(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash the password with a fresh random salt
    ///
    /// CPU-bound: call from a blocking context (`spawn_blocking`) inside
    /// async code.
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::hash(password.as_bytes(), self.cost)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword { hash })
    }
}

// ============================================================================
// Verifier
// ============================================================================

/// Password check against a stored hash
///
/// CPU-bound like hashing; run it on the blocking pool.
pub trait PasswordVerifier: Clone + Send + Sync + 'static {
    fn verify(&self, hash: &HashedPassword, password: &ClearTextPassword) -> bool;
}

impl PasswordVerifier for PasswordHasher {
    fn verify(&self, hash: &HashedPassword, password: &ClearTextPassword) -> bool {
        hash.verify(password)
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in bcrypt modular crypt format (`$2b$<cost>$<salt+hash>`)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a stored string (e.g., from database)
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        if !hash.starts_with("$2") || hash.len() != BCRYPT_HASH_LENGTH {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self { hash })
    }

    /// Get the string for storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Returns `false` on mismatch and on any internal bcrypt error.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        bcrypt::verify(password.as_bytes(), &self.hash).unwrap_or(false)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
