//! Sign-in form validation
//!
//! Pure, deterministic rules applied per field. Fields without a rule
//! are never flagged, so the validator can be handed the whole form
//! record as-is.

use app_state::FieldError;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Field key for the email input
pub const EMAIL_FIELD: &str = "email";
/// Field key for the password input
pub const PASSWORD_FIELD: &str = "password";

/// `local@domain.tld` shape: an `@`, at least one `.` after it, and no
/// embedded whitespace. Deliberately looser than full RFC address
/// grammar; the simulated backend is the authority on real addresses.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Validate a field-keyed record, producing a field-keyed error record
///
/// Rules:
/// - `email`: [`FieldError::Required`] when empty after trimming, else
///   [`FieldError::Format`] unless it matches the email shape.
/// - `password`: [`FieldError::Required`] when empty.
///
/// An empty result means the form may be submitted.
pub fn validate(fields: &BTreeMap<String, String>) -> BTreeMap<String, FieldError> {
    let mut errors = BTreeMap::new();

    let email = fields.get(EMAIL_FIELD).map(String::as_str).unwrap_or("");
    let email = email.trim();
    if email.is_empty() {
        errors.insert(EMAIL_FIELD.to_string(), FieldError::Required);
    } else if !email_pattern().is_match(email) {
        errors.insert(EMAIL_FIELD.to_string(), FieldError::Format);
    }

    let password = fields.get(PASSWORD_FIELD).map(String::as_str).unwrap_or("");
    if password.is_empty() {
        errors.insert(PASSWORD_FIELD.to_string(), FieldError::Required);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str, password: &str) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(EMAIL_FIELD.to_string(), email.to_string());
        map.insert(PASSWORD_FIELD.to_string(), password.to_string());
        map
    }

    #[test]
    fn empty_fields_are_required() {
        let errors = validate(&fields("", ""));
        assert_eq!(errors.get(EMAIL_FIELD), Some(&FieldError::Required));
        assert_eq!(errors.get(PASSWORD_FIELD), Some(&FieldError::Required));
    }

    #[test]
    fn malformed_email_flags_only_email() {
        let errors = validate(&fields("not-an-email", "x"));
        assert_eq!(errors.get(EMAIL_FIELD), Some(&FieldError::Format));
        assert_eq!(errors.get(PASSWORD_FIELD), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn valid_credentials_produce_no_errors() {
        assert!(validate(&fields("a@b.com", "x")).is_empty());
    }

    #[test]
    fn email_is_trimmed_before_checking() {
        assert!(validate(&fields("  a@b.com  ", "x")).is_empty());
        let errors = validate(&fields("   ", "x"));
        assert_eq!(errors.get(EMAIL_FIELD), Some(&FieldError::Required));
    }

    #[test]
    fn email_needs_dot_after_at() {
        let errors = validate(&fields("a@b", "x"));
        assert_eq!(errors.get(EMAIL_FIELD), Some(&FieldError::Format));
    }

    #[test]
    fn email_rejects_embedded_whitespace() {
        let errors = validate(&fields("a b@c.com", "x"));
        assert_eq!(errors.get(EMAIL_FIELD), Some(&FieldError::Format));
    }

    #[test]
    fn password_has_no_strength_rule() {
        assert!(validate(&fields("a@b.com", "1")).is_empty());
    }

    #[test]
    fn unknown_fields_are_never_flagged() {
        let mut map = fields("a@b.com", "x");
        map.insert("remember_me".to_string(), String::new());
        assert!(validate(&map).is_empty());
    }

    #[test]
    fn missing_fields_count_as_empty() {
        let errors = validate(&BTreeMap::new());
        assert_eq!(errors.get(EMAIL_FIELD), Some(&FieldError::Required));
        assert_eq!(errors.get(PASSWORD_FIELD), Some(&FieldError::Required));
    }
}
