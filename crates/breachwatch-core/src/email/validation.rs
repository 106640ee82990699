//! Email format validation.

use super::model::EmailAddress;

/// Validation error for user-supplied email input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Input is empty after trimming.
    #[error("Please enter an email address")]
    Empty,
    /// Input does not look like `local@domain.tld`.
    #[error("Invalid email address format")]
    MalformedEmail,
}

/// Validate raw user input as an email address.
///
/// Trims leading/trailing whitespace and checks the result against a
/// `local@domain.tld` shape: exactly one `@`, a non-empty local part, a
/// domain with at least one dot and no empty segments, and no embedded
/// whitespace. Pure function, no side effects.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] if nothing remains after trimming,
/// [`ValidationError::MalformedEmail`] if the shape check fails.
pub fn validate(input: &str) -> Result<EmailAddress, ValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !is_valid_email(trimmed) {
        return Err(ValidationError::MalformedEmail);
    }

    Ok(EmailAddress::new_unchecked(trimmed.to_string()))
}

/// Basic structural email check.
fn is_valid_email(email: &str) -> bool {
    // Embedded whitespace is never valid
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    // Must contain exactly one @
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    // Local part must not be empty
    if local.is_empty() {
        return false;
    }

    // Domain must contain at least one dot and not be empty
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    // Domain parts must not be empty
    let domain_parts: Vec<&str> = domain.split('.').collect();
    if domain_parts.iter().any(|p| p.is_empty()) {
        return false;
    }

    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user+tag@sub.example.com"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate(""), Err(ValidationError::Empty));
        assert_eq!(validate("   "), Err(ValidationError::Empty));
        assert_eq!(validate("\t\n"), Err(ValidationError::Empty));
    }

    #[test]
    fn test_validate_trims() {
        let email = validate("  user@example.com  ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    proptest! {
        #[test]
        fn prop_no_at_sign_is_malformed(input in "[a-zA-Z0-9. ]+") {
            prop_assume!(!input.trim().is_empty());
            prop_assert_eq!(validate(&input), Err(ValidationError::MalformedEmail));
        }

        #[test]
        fn prop_well_formed_round_trips(
            local in "[a-z0-9.+-]{1,16}",
            domain in "[a-z0-9-]{1,12}",
            tld in "[a-z]{2,6}",
        ) {
            let input = format!("{local}@{domain}.{tld}");
            let email = validate(&input).unwrap();
            prop_assert_eq!(email.as_str(), input.as_str());
        }
    }
}
