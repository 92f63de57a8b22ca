// SPDX-License-Identifier: MPL-2.0
//! Contact form domain types and validation.
//!
//! `FormInput` is built from the raw field buffers at submission time and
//! discarded once the submission attempt completes. Validation runs in a
//! fixed order: required fields first, then the email shape.

use std::fmt;

/// A snapshot of the contact form fields, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional; never validated.
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Validation failures, each mapping to a fixed user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One of the five required fields is empty after trimming.
    MissingRequiredField,
    /// The email does not match the `local@domain.tld` shape.
    InvalidEmail,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField => "contact-error-required",
            ValidationError::InvalidEmail => "contact-error-email",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingRequiredField => {
                write!(f, "a required field is empty")
            }
            ValidationError::InvalidEmail => write!(f, "email address is malformed"),
        }
    }
}

impl FormInput {
    /// Builds a `FormInput` from raw field buffers, trimming each value.
    /// An all-whitespace phone collapses to `None`.
    pub fn from_fields(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
        subject: &str,
        message: &str,
    ) -> Self {
        let phone = phone.trim();
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Checks required fields, then the email shape.
    ///
    /// The first failed check wins; the caller reports a single error per
    /// submission attempt.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.subject,
            &self.message,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingRequiredField);
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }
}

/// Accepts `local@domain.tld`: exactly one `@` separating two non-empty
/// parts, a `.` inside the domain with text on both sides, and no whitespace
/// or further `@` anywhere.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.split_once('.') {
        Some((name, rest)) => !name.is_empty() && !rest.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> FormInput {
        FormInput::from_fields("A", "B", "a@b.co", "", "S", "M")
    }

    #[test]
    fn valid_input_passes() {
        assert_eq!(valid_input().validate(), Ok(()));
    }

    #[test]
    fn each_required_field_is_enforced() {
        for blank in 0..5 {
            let mut input = valid_input();
            match blank {
                0 => input.first_name.clear(),
                1 => input.last_name.clear(),
                2 => input.email.clear(),
                3 => input.subject.clear(),
                _ => input.message.clear(),
            }
            assert_eq!(
                input.validate(),
                Err(ValidationError::MissingRequiredField),
                "field {blank} should be required"
            );
        }
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let input = FormInput::from_fields("  ", "B", "a@b.co", "", "S", "M");
        assert_eq!(input.validate(), Err(ValidationError::MissingRequiredField));
    }

    #[test]
    fn phone_is_optional() {
        let input = FormInput::from_fields("A", "B", "a@b.co", "   ", "S", "M");
        assert_eq!(input.phone, None);
        assert_eq!(input.validate(), Ok(()));

        let input = FormInput::from_fields("A", "B", "a@b.co", " 555-0100 ", "S", "M");
        assert_eq!(input.phone.as_deref(), Some("555-0100"));
        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn required_check_runs_before_email_check() {
        let input = FormInput::from_fields("", "B", "not-an-email", "", "S", "M");
        assert_eq!(input.validate(), Err(ValidationError::MissingRequiredField));
    }

    #[test]
    fn accepts_plain_addresses() {
        for email in ["a@b.co", "first.last@example.com", "x+tag@sub.domain.org"] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("name.example.com"));
    }

    #[test]
    fn rejects_missing_dot_in_domain() {
        assert!(!is_valid_email("name@example"));
        assert!(!is_valid_email("name@example."));
        assert!(!is_valid_email("name@.com"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_valid_email("na me@example.com"));
        assert!(!is_valid_email("name@exam ple.com"));
        assert!(!is_valid_email("name@example.com "));
    }

    #[test]
    fn rejects_empty_local_part_and_double_at() {
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn malformed_email_yields_email_error() {
        let input = FormInput::from_fields("A", "B", "not-an-email", "", "S", "M");
        assert_eq!(input.validate(), Err(ValidationError::InvalidEmail));
        assert_eq!(
            ValidationError::InvalidEmail.i18n_key(),
            "contact-error-email"
        );
    }
}
