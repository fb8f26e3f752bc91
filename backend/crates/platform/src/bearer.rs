//! Bearer Token Extraction
//!
//! Reads `Authorization: Bearer <token>` from request headers.

use axum::http::{HeaderMap, header};

/// Why a request carried no usable bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerAbsence {
    /// No `Authorization` header at all
    Missing,
    /// Header present but not valid visible ASCII
    NotAscii,
    /// A scheme other than `Bearer`, or `Bearer` with no token after it
    WrongScheme,
}

/// Extract the bearer token
///
/// The scheme is matched case-insensitively (RFC 7235); surrounding
/// whitespace around the token is ignored.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerAbsence> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerAbsence::Missing)?
        .to_str()
        .map_err(|_| BearerAbsence::NotAscii)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(BearerAbsence::WrongScheme)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerAbsence::WrongScheme);
    }

    // Non-empty: the value was trimmed before splitting
    Ok(token.trim())
}
