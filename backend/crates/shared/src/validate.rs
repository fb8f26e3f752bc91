//! Cross-cutting validation rules
//!
//! Pure predicates shared by every validator in the workspace. These never
//! allocate error values themselves; callers decide the message.

use validator::ValidateEmail;

/// Email grammar check (HTML5 / RFC 5322 subset) on a dotted domain.
///
/// The domain needs at least two labels and its last label at least two
/// non-numeric characters, so `a@localhost` and `a@x` are rejected.
pub fn is_email(value: &str) -> bool {
    if !value.validate_email() {
        return false;
    }
    let Some((_, domain)) = value.rsplit_once('@') else {
        return false;
    };
    has_dotted_domain(domain)
}

fn has_dotted_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }
    labels.last().is_some_and(|tld| {
        tld.chars().count() >= 2 && !tld.chars().all(|c| c.is_ascii_digit())
    })
}

/// True when the value is empty after trimming surrounding whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// True when the value has at least `min` Unicode scalar values.
///
/// Whitespace counts; use [`is_blank`] to reject whitespace-only input.
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Non-empty and at least `min` characters long.
pub fn is_present_with_min_length(value: &str, min: usize) -> bool {
    !is_blank(value) && has_min_length(value, min)
}
