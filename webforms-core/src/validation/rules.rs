use std::{fmt, sync::OnceLock};

use regex::Regex;

use crate::models::{FieldKind, FieldSpec};

pub const MIN_PHONE_DIGITS: usize = 10;
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static PHONE_CHARS_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorReason {
    Required,
    InvalidEmail,
    InvalidPhone,
    MessageTooShort,
}

impl FieldErrorReason {
    /// The text shown beneath the field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::InvalidPhone => "Please enter a valid phone number",
            Self::MessageTooShort => "Please provide more details (at least 10 characters)",
        }
    }
}

/// A failed field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: FieldErrorReason,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        self.reason.message()
    }
}

impl fmt::Display for FieldError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Validates one field value against its spec.
///
/// The value is trimmed first. Rules are tried in order and the first
/// failure is returned:
///
/// 1. required and empty
/// 2. email that does not look like `local@domain.tld`
/// 3. phone with characters other than digits, whitespace, `+`, `-`,
///    parentheses, or fewer than 10 digits
/// 4. message shorter than 10 characters
///
/// Optional empty fields always pass.
///
/// # Examples
///
/// ```
/// use webforms_core::{FieldKind, FieldSpec, validation::{FieldErrorReason, validate_field}};
///
/// let email = FieldSpec::required("email", FieldKind::Email);
/// assert!(validate_field(&email, "a@b.c").is_ok());
/// assert_eq!(
///     validate_field(&email, "a@b").unwrap_err().reason,
///     FieldErrorReason::InvalidEmail
/// );
/// ```
pub fn validate_field(
    spec: &FieldSpec,
    raw: &str,
) -> Result<(), FieldError> {
    let value = raw.trim();
    let fail = |reason| FieldError {
        field: spec.id,
        reason,
    };

    if value.is_empty() {
        return if spec.required {
            Err(fail(FieldErrorReason::Required))
        } else {
            Ok(())
        };
    }

    match spec.kind {
        FieldKind::Email if !is_valid_email(value) => Err(fail(FieldErrorReason::InvalidEmail)),
        FieldKind::Phone if !is_valid_phone(value) => Err(fail(FieldErrorReason::InvalidPhone)),
        FieldKind::Message if value.chars().count() < MIN_MESSAGE_CHARS => {
            Err(fail(FieldErrorReason::MessageTooShort))
        }
        _ => Ok(()),
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the
/// domain part. Matching is done on the lowercased value.
pub fn is_valid_email(value: &str) -> bool {
    let pattern = EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
    pattern.is_match(&value.to_lowercase())
}

/// Digits, whitespace, `+`, `-` and parentheses only, with at least ten
/// digits.
pub fn is_valid_phone(value: &str) -> bool {
    let pattern = PHONE_CHARS_PATTERN
        .get_or_init(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern is valid"));
    pattern.is_match(value)
        && value.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}
