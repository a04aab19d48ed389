//! Answer validators.
//! Pure checks run by the front end before any value reaches the engine.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("slug pattern is a valid regex")
});

/// Reasons a proposed value was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    #[error("project name must follow the pattern: lowercase letters, numbers, hyphens, and dots. Must start and end with alphanumeric characters")]
    InvalidFormat,

    #[error("domain can only contain lowercase letters, numbers, dots and hyphens")]
    InvalidCharacters,

    #[error("domain must have at least two parts (e.g., com.example)")]
    TooFewParts,

    #[error("each part of domain cannot be empty or start/end with hyphens")]
    InvalidPart,

    #[error("unknown variant '{name}' (expected one of: {expected})")]
    UnknownVariant { name: String, expected: String },
}

/// Checks a project slug such as `my-plugin` or `links.v2`.
pub fn validate_slug(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyInput("project name"));
    }
    if !SLUG_PATTERN.is_match(name) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

/// Checks a dotted domain such as `com.example`.
pub fn validate_domain(domain: &str) -> Result<(), ValidationError> {
    if domain.trim().is_empty() {
        return Err(ValidationError::EmptyInput("domain"));
    }
    if !domain.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-') {
        return Err(ValidationError::InvalidCharacters);
    }

    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() < 2 {
        return Err(ValidationError::TooFewParts);
    }
    if parts.iter().any(|part| part.is_empty() || part.starts_with('-') || part.ends_with('-')) {
        return Err(ValidationError::InvalidPart);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slug_accepts_valid_names() {
        for name in ["my-plugin", "plugin", "a", "links.v2", "a1-b2.c3"] {
            assert_eq!(validate_slug(name), Ok(()), "{name} should be valid");
        }
    }

    #[test]
    fn test_validate_slug_rejects_invalid_names() {
        assert_eq!(validate_slug(""), Err(ValidationError::EmptyInput("project name")));
        assert_eq!(validate_slug("   "), Err(ValidationError::EmptyInput("project name")));
        for name in ["-bad-", "Bad", "my_plugin", "a..b", "a.", ".a", "my plugin", "x-"] {
            assert_eq!(validate_slug(name), Err(ValidationError::InvalidFormat), "{name}");
        }
    }

    #[test]
    fn test_validate_domain() {
        assert_eq!(validate_domain("com.example"), Ok(()));
        assert_eq!(validate_domain("run.halo.app"), Ok(()));
        assert_eq!(validate_domain(""), Err(ValidationError::EmptyInput("domain")));
        assert_eq!(validate_domain("Com.Example"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_domain("com_example.x"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_domain("com"), Err(ValidationError::TooFewParts));
        assert_eq!(validate_domain("com..example"), Err(ValidationError::InvalidPart));
        assert_eq!(validate_domain(".com"), Err(ValidationError::InvalidPart));
        assert_eq!(validate_domain("com.-example"), Err(ValidationError::InvalidPart));
        assert_eq!(validate_domain("com.example-"), Err(ValidationError::InvalidPart));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::TooFewParts.to_string(),
            "domain must have at least two parts (e.g., com.example)"
        );
        assert_eq!(
            ValidationError::EmptyInput("domain").to_string(),
            "domain cannot be empty"
        );
    }
}
