// Validation utilities module
// Custom validation functions used by the request DTOs

use regex::Regex;
use std::sync::OnceLock;
use validator::ValidationError;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    })
}

/// Validates the basic shape of an email address: one `@`, no whitespace,
/// and a dot somewhere in the domain part.
pub fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_email");
        err.message = Some("Invalid email format".into());
        Err(err)
    }
}

/// Password strength policy: at least 8 characters, one uppercase letter,
/// one digit, and one symbol from !@#$%^&*
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.len() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| "!@#$%^&*".contains(c));

    if long_enough && has_upper && has_digit && has_symbol {
        Ok(())
    } else {
        let mut err = ValidationError::new("weak_password");
        err.message = Some(
            "Password must be at least 8 characters long, contain 1 uppercase letter, 1 number, and 1 special character."
                .into(),
        );
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strong_password_passes() {
        assert!(validate_password_strength("Abc123!@").is_ok());
    }

    #[test]
    fn test_password_missing_uppercase_and_symbol_fails() {
        assert!(validate_password_strength("abc12345").is_err());
    }

    #[test]
    fn test_short_password_fails() {
        assert!(validate_password_strength("Ab1!").is_err());
    }

    #[test]
    fn test_password_missing_digit_fails() {
        assert!(validate_password_strength("Abcdefg!").is_err());
    }

    #[test]
    fn test_password_missing_symbol_fails() {
        assert!(validate_password_strength("Abcdefg1").is_err());
    }

    #[test]
    fn test_valid_email_shapes() {
        assert!(validate_email_shape("user@example.com").is_ok());
        assert!(validate_email_shape("a.b@c.d.org").is_ok());
    }

    #[test]
    fn test_invalid_email_shapes() {
        assert!(validate_email_shape("not-an-email").is_err());
        assert!(validate_email_shape("user@nodot").is_err());
        assert!(validate_email_shape("user name@example.com").is_err());
        assert!(validate_email_shape("@example.com").is_err());
    }

    proptest! {
        // No all-lowercase-alphanumeric password ever passes the policy
        #[test]
        fn prop_lowercase_passwords_rejected(password in "[a-z0-9]{8,20}") {
            prop_assert!(validate_password_strength(&password).is_err());
        }

        // Any password built from the required character classes passes
        #[test]
        fn prop_compliant_passwords_accepted(
            upper in "[A-Z]{1,5}",
            lower in "[a-z]{5,10}",
            digit in "[0-9]{1,5}",
            symbol in "[!@#$%^&*]{1,3}"
        ) {
            let password = format!("{}{}{}{}", upper, lower, digit, symbol);
            prop_assert!(validate_password_strength(&password).is_ok());
        }
    }
}
