//! Field and form validation.
//!
//! Validation failures are ordinary values ([`FieldError`]); they are shown
//! next to the field and never propagated as errors.

mod form;
mod rules;

pub use form::{FormValidation, validate_all};
pub use rules::{
    FieldError, FieldErrorReason, MIN_MESSAGE_CHARS, MIN_PHONE_DIGITS, is_valid_email,
    is_valid_phone, validate_field,
};
