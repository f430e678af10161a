//! Signup form validation.
//!
//! [`validate`] turns an untrusted [`RawSignupForm`] into a normalized
//! [`ValidatedSignup`] or rejects it with the first failing rule. The
//! rules run in a fixed order and short-circuit, so a form with several
//! problems reports exactly one.

use serde::Deserialize;

/// A signup form exactly as received from the client, untrusted.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSignupForm {
    pub name: String,
    pub email: String,
    /// Accepts `zip` as an alias for compatibility with the public form payload.
    #[serde(alias = "zip")]
    pub postal_code: String,
}

/// A signup form that passed validation, with all fields normalized:
/// name trimmed, email trimmed and lowercased, postal code trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSignup {
    pub name: String,
    pub email: String,
    pub postal_code: String,
}

/// Why a signup form was rejected. One variant per rule, reported in
/// rule order: the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Postal code must be at least 5 characters")]
    InvalidPostalCode,
}

impl ValidationError {
    /// Stable machine-readable code for API error envelopes.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPostalCode => "INVALID_POSTAL_CODE",
        }
    }
}

/// Minimum trimmed postal code length (US-style five-digit codes).
const MIN_POSTAL_CODE_LEN: usize = 5;

/// Validate a raw form, applying the rules in order and stopping at the
/// first failure:
///
/// 1. `name` non-empty after trimming;
/// 2. `email` shaped like `local@domain.tld` (non-empty local part, at
///    least one `.` after the `@`, no whitespace);
/// 3. `postal_code` at least five characters after trimming.
///
/// Pure and deterministic; no side effects.
pub fn validate(form: &RawSignupForm) -> Result<ValidatedSignup, ValidationError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let email = form.email.trim();
    if !has_email_shape(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let postal_code = form.postal_code.trim();
    if postal_code.chars().count() < MIN_POSTAL_CODE_LEN {
        return Err(ValidationError::InvalidPostalCode);
    }

    Ok(ValidatedSignup {
        name: name.to_string(),
        email: email.to_lowercase(),
        postal_code: postal_code.to_string(),
    })
}

/// Basic `local@domain.tld` shape check: no whitespace, a non-empty
/// local part before the first `@`, and at least one `.` somewhere
/// after it. Intentionally loose; the email is a contact hint, not an
/// authenticated identity.
fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.find('@') {
        Some(at) if at > 0 => email[at + 1..].contains('.'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, zip: &str) -> RawSignupForm {
        RawSignupForm {
            name: name.to_string(),
            email: email.to_string(),
            postal_code: zip.to_string(),
        }
    }

    #[test]
    fn empty_name_is_rejected_first() {
        let result = validate(&form("", "a@b.com", "12345"));
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let result = validate(&form("   ", "a@b.com", "12345"));
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn malformed_email_is_rejected() {
        assert_eq!(
            validate(&form("A", "not-an-email", "12345")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate(&form("A", "a@nodot", "12345")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate(&form("A", "@b.com", "12345")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate(&form("A", "a b@c.com", "12345")),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn short_postal_code_is_rejected() {
        let result = validate(&form("A", "a@b.com", "123"));
        assert_eq!(result, Err(ValidationError::InvalidPostalCode));
    }

    #[test]
    fn rules_short_circuit_in_order() {
        // Both email and postal code are bad; the email rule fires first.
        let result = validate(&form("A", "bad", "1"));
        assert_eq!(result, Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn valid_form_is_normalized() {
        let result = validate(&form(" A ", " A@B.COM ", " 73301 ")).unwrap();
        assert_eq!(result.name, "A");
        assert_eq!(result.email, "a@b.com");
        assert_eq!(result.postal_code, "73301");
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(ValidationError::EmptyName.code(), "EMPTY_NAME");
        assert_eq!(ValidationError::InvalidEmail.code(), "INVALID_EMAIL");
        assert_eq!(
            ValidationError::InvalidPostalCode.code(),
            "INVALID_POSTAL_CODE"
        );
    }

    #[test]
    fn raw_form_accepts_zip_alias() {
        let form: RawSignupForm =
            serde_json::from_str(r#"{"name":"A","email":"a@b.com","zip":"73301"}"#).unwrap();
        assert_eq!(form.postal_code, "73301");
    }
}
