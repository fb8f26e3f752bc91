//! Authorization Policy
//!
//! Checks shared by every protected operation. Reading and listing need
//! an authenticated caller; mutations of a resource also need ownership.

use kernel::id::AccountId;
use thiserror::Error;

use crate::domain::identity::{CallContext, Identity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("User not authenticated!")]
    Unauthenticated,

    #[error("Not authorized!")]
    Forbidden,
}

/// Yield the caller identity, or fail when the call is anonymous
pub fn require_authenticated(ctx: &CallContext) -> Result<&Identity, PolicyViolation> {
    ctx.identity().ok_or(PolicyViolation::Unauthenticated)
}

/// Fail unless the caller owns the resource
pub fn require_owner(identity: &Identity, owner: &AccountId) -> Result<(), PolicyViolation> {
    if identity.account_id != *owner {
        return Err(PolicyViolation::Forbidden);
    }
    Ok(())
}
