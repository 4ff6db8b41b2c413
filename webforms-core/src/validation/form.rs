use super::{FieldError, validate_field};
use crate::models::FieldSpec;

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidation {
    passed: Vec<&'static str>,
    errors: Vec<FieldError>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Every failure, in field order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Ids of the fields that passed.
    pub fn passed(&self) -> &[&'static str] {
        &self.passed
    }

    pub fn error_for(
        &self,
        field: &str,
    ) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Validates every field without stopping at the first failure, so all
/// errors can be shown together.
pub fn validate_all<'a>(fields: impl IntoIterator<Item = (FieldSpec, &'a str)>) -> FormValidation {
    let mut validation = FormValidation::default();
    for (spec, value) in fields {
        match validate_field(&spec, value) {
            Ok(()) => validation.passed.push(spec.id),
            Err(error) => validation.errors.push(error),
        }
    }
    validation
}
