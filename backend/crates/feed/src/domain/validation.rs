//! Input Validation
//!
//! Pure validators for post inputs. Every violation is collected.

use kernel::error::field::ValidationErrors;
use kernel::id::PostId;
use kernel::validate::{is_blank, is_present_with_min_length};

pub const MIN_TITLE_LENGTH: usize = 5;
pub const MIN_CONTENT_LENGTH: usize = 5;

pub const INVALID_POST_ID_MESSAGE: &str = "Invalid post Id!";

pub fn validate_post(title: &str, content: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.check(
        !is_present_with_min_length(title, MIN_TITLE_LENGTH),
        "Invalid title!",
    );
    errors.check(
        !is_present_with_min_length(content, MIN_CONTENT_LENGTH),
        "Invalid content!",
    );
    errors
}

/// Parse a caller-supplied post id
///
/// Empty input is a validation failure. A non-empty string that is not a
/// well-formed id names no post and yields `Ok(None)`.
pub fn parse_post_id(raw: &str) -> Result<Option<PostId>, ValidationErrors> {
    if is_blank(raw) {
        let mut errors = ValidationErrors::new();
        errors.push(INVALID_POST_ID_MESSAGE);
        return Err(errors);
    }
    Ok(raw.trim().parse().ok())
}
