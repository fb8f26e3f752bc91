//! Call Context
//!
//! Per-call identity produced by the auth gate. Every operation receives
//! one; nothing is shared between calls.

use kernel::id::AccountId;

use crate::domain::value_object::email::Email;

/// Caller identity carried by a verified session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub account_id: AccountId,
    pub email: Email,
}

/// Result of the auth gate for one inbound call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CallContext {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

impl CallContext {
    pub fn authenticated(account_id: AccountId, email: Email) -> Self {
        Self::Authenticated(Identity { account_id, email })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Anonymous => None,
        }
    }
}
