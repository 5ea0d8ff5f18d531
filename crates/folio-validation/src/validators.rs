// File: src/validators.rs
// Purpose: Contact form predicates (trimmed length and loose email format)

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum number of characters in a trimmed name
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum number of characters in a trimmed message
pub const MESSAGE_MIN_CHARS: usize = 10;

// local@domain.tld, no whitespace and no extra '@' in any part.
// Accepts things like "a@b.c"; this is not RFC 5321 validation.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

fn trimmed_chars(text: &str) -> usize {
    text.trim().chars().count()
}

/// Name passes when it has at least two characters after trimming
pub fn validate_name(text: &str) -> bool {
    trimmed_chars(text) >= NAME_MIN_CHARS
}

/// Email passes when the trimmed text looks like `local@domain.tld`
pub fn validate_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text.trim())
}

/// Message passes when it has at least ten characters after trimming
pub fn validate_message(text: &str) -> bool {
    trimmed_chars(text) >= MESSAGE_MIN_CHARS
}
