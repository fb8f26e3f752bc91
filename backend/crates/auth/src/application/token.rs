//! Token Service
//!
//! Issues and verifies stateless session tokens: standard JWTs signed
//! with HS256. Payload is `{"userId", "email", "iat", "exp"}` with times
//! in seconds since the epoch. A token is valid iff its signature checks
//! out and `now < exp`.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use kernel::id::AccountId;
use platform::secret::SigningSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::identity::Identity;
use crate::domain::value_object::email::Email;

/// Why a token was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature does not match")]
    BadSignature,

    #[error("token has expired")]
    Expired,

    #[error("token signing failed: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::InvalidSignature => TokenError::BadSignature,
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        }
    }
}

/// Signed token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "userId")]
    pub account_id: AccountId,
    pub email: Email,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn identity(&self) -> Identity {
        Identity {
            account_id: self.account_id,
            email: self.email.clone(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// A freshly issued token and the claims it carries
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: SessionClaims,
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &SigningSecret, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `verify_at`
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn issue(&self, identity: &Identity) -> Result<IssuedToken, TokenError> {
        self.issue_at(identity, Utc::now())
    }

    pub fn issue_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let iat = issued_at.timestamp();
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);

        let claims = SessionClaims {
            account_id: identity.account_id,
            email: identity.email.clone(),
            iat,
            exp: iat.saturating_add(ttl_secs),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken { token, claims })
    }

    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, TokenError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)?;

        if data.claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn identity() -> Identity {
        Identity {
            account_id: AccountId::new(),
            email: Email::new("a@x.io").unwrap(),
        }
    }

    fn service() -> TokenService {
        TokenService::new(&SigningSecret::generate(), Duration::from_secs(3600))
    }

    #[test]
    fn test_issue_and_verify() {
        let service = service();
        let identity = identity();
        let issued = service.issue(&identity).unwrap();

        let claims = service.verify(&issued.token).unwrap();
        assert_eq!(claims.identity(), identity);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(issued.token.split('.').count(), 3);
    }

    #[test]
    fn test_payload_field_names() {
        let claims = SessionClaims {
            account_id: AccountId::new(),
            email: Email::new("a@x.io").unwrap(),
            iat: 1,
            exp: 2,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["userId"], claims.account_id.to_string());
        assert_eq!(json["email"], "a@x.io");
        assert_eq!(json["iat"], 1);
        assert_eq!(json["exp"], 2);
    }

    #[test]
    fn test_expiry_boundary() {
        let service = service();
        let issued_at = Utc::now();
        let issued = service.issue_at(&identity(), issued_at).unwrap();

        let just_before = issued_at + TimeDelta::seconds(3599);
        assert!(service.verify_at(&issued.token, just_before).is_ok());

        let at_expiry = issued_at + TimeDelta::seconds(3600);
        assert_eq!(
            service.verify_at(&issued.token, at_expiry),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_token_from_other_secret() {
        let issued = service().issue(&identity()).unwrap();
        assert_eq!(service().verify(&issued.token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_malformed() {
        let service = service();
        assert_eq!(service.verify("not-a-token"), Err(TokenError::Malformed));
        assert_eq!(service.verify(""), Err(TokenError::Malformed));
        assert_eq!(service.verify("a.b.c"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_debug_has_no_key_material() {
        let debug_output = format!("{:?}", service());
        assert!(debug_output.starts_with("TokenService"));
        assert!(!debug_output.contains("key"));
    }
}
