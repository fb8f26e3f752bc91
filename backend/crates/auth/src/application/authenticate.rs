//! Authenticate Use Case
//!
//! Resolves the call context from an optional session token. Never fails:
//! any problem with the token leaves the call anonymous.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::identity::CallContext;

pub struct AuthenticateUseCase {
    tokens: Arc<TokenService>,
}

impl AuthenticateUseCase {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    pub fn execute(&self, token: Option<&str>) -> CallContext {
        let Some(token) = token else {
            return CallContext::Anonymous;
        };

        match self.tokens.verify(token) {
            Ok(claims) => CallContext::Authenticated(claims.identity()),
            Err(reason) => {
                tracing::debug!(%reason, "Session token rejected");
                CallContext::Anonymous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::Identity;
    use crate::domain::value_object::email::Email;
    use chrono::{TimeDelta, Utc};
    use kernel::id::AccountId;
    use platform::secret::SigningSecret;
    use std::time::Duration;

    fn setup() -> (Arc<TokenService>, AuthenticateUseCase) {
        let tokens = Arc::new(TokenService::new(
            &SigningSecret::generate(),
            Duration::from_secs(60),
        ));
        (tokens.clone(), AuthenticateUseCase::new(tokens))
    }

    #[test]
    fn test_no_token_is_anonymous() {
        let (_, use_case) = setup();
        assert_eq!(use_case.execute(None), CallContext::Anonymous);
    }

    #[test]
    fn test_valid_token_is_authenticated() {
        let (tokens, use_case) = setup();
        let identity = Identity {
            account_id: AccountId::new(),
            email: Email::new("a@x.io").unwrap(),
        };
        let issued = tokens.issue(&identity).unwrap();
        assert_eq!(
            use_case.execute(Some(&issued.token)),
            CallContext::Authenticated(identity)
        );
    }

    #[test]
    fn test_bad_tokens_are_anonymous() {
        let (tokens, use_case) = setup();
        let identity = Identity {
            account_id: AccountId::new(),
            email: Email::new("a@x.io").unwrap(),
        };
        let expired = tokens
            .issue_at(&identity, Utc::now() - TimeDelta::seconds(120))
            .unwrap();

        assert_eq!(use_case.execute(Some(&expired.token)), CallContext::Anonymous);
        assert_eq!(use_case.execute(Some("garbage")), CallContext::Anonymous);
    }
}
