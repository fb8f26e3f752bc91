//! Field-level validation errors
//!
//! Validators accumulate every failed rule into [`ValidationErrors`]
//! instead of stopping at the first one.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// A single failed field rule, rendered to callers as `{ "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub message: Cow<'static, str>,
}

impl FieldError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Ordered list of field errors collected by one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure when `failed` is true.
    pub fn check(&mut self, failed: bool, message: impl Into<Cow<'static, str>>) {
        if failed {
            self.0.push(FieldError::new(message));
        }
    }

    pub fn push(&mut self, message: impl Into<Cow<'static, str>>) {
        self.0.push(FieldError::new(message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }

    /// `Ok(())` when nothing was recorded, otherwise the full list.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_ref()).collect();
        write!(f, "{}", messages.join(", "))
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}
