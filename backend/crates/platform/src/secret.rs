//! Signing Secret
//!
//! Holder for the server-side symmetric key used to sign session tokens.
//! Loaded once at startup; immutable afterwards.

use std::fmt;

use base64::{Engine, engine::general_purpose};
use rand::RngCore;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum accepted key length in bytes (HS256 block-sized key)
pub const MIN_SECRET_BYTES: usize = 32;

/// Prefix selecting base64 decoding of the configured value
const BASE64_PREFIX: &str = "base64:";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    #[error("signing secret must be at least {MIN_SECRET_BYTES} bytes (got {0})")]
    TooShort(usize),

    #[error("signing secret is not valid base64")]
    InvalidBase64,
}

/// Token signing secret
///
/// ## Security
/// - Never printed: `Debug` is redacted and there is no `Display`
/// - Zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Parse a configured value
    ///
    /// `base64:<data>` is decoded; any other value is used as raw UTF-8 bytes.
    pub fn from_config(value: &str) -> Result<Self, SecretError> {
        let bytes = match value.strip_prefix(BASE64_PREFIX) {
            Some(encoded) => general_purpose::STANDARD
                .decode(encoded.trim())
                .map_err(|_| SecretError::InvalidBase64)?,
            None => value.as_bytes().to_vec(),
        };
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, SecretError> {
        if bytes.len() < MIN_SECRET_BYTES {
            return Err(SecretError::TooShort(bytes.len()));
        }
        Ok(Self(bytes))
    }

    /// Random secret (for tests and local development)
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; MIN_SECRET_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningSecret").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value() {
        let value = "k".repeat(MIN_SECRET_BYTES);
        let secret = SigningSecret::from_config(&value).unwrap();
        assert_eq!(secret.as_bytes(), value.as_bytes());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            SigningSecret::from_config("dontmesswiththejsonwebtoken").unwrap_err(),
            SecretError::TooShort(27)
        );
    }

    #[test]
    fn test_base64_value() {
        let encoded = general_purpose::STANDARD.encode([7u8; 48]);
        let secret = SigningSecret::from_config(&format!("base64:{encoded}")).unwrap();
        assert_eq!(secret.as_bytes(), &[7u8; 48]);

        assert_eq!(
            SigningSecret::from_config("base64:***").unwrap_err(),
            SecretError::InvalidBase64
        );
    }

    #[test]
    fn test_generate_is_random() {
        let a = SigningSecret::generate();
        let b = SigningSecret::generate();
        assert_ne!(a.as_bytes(), b.as_bytes());
        assert_eq!(a.as_bytes().len(), MIN_SECRET_BYTES);
    }

    #[test]
    fn test_debug_redaction() {
        let value = "super-secret-value-that-is-long-enough";
        let secret = SigningSecret::from_config(value).unwrap();
        let debug_output = format!("{:?}", secret);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains(value));
    }
}
