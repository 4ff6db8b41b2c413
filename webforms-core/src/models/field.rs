/// How a field's value is checked beyond the required rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    /// The free-text message; subject to the minimum length rule.
    Message,
    Checkbox,
}

/// Static description of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(
        id: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            id,
            kind,
            required: true,
        }
    }

    pub const fn optional(
        id: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            id,
            kind,
            required: false,
        }
    }
}

/// Current value of a field plus the outcome of its last validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub valid: bool,
    pub error: Option<String>,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: String::new(),
            valid: true,
            error: None,
        }
    }
}

impl FieldState {
    pub fn set_value(
        &mut self,
        value: impl Into<String>,
    ) {
        self.value = value.into();
    }

    pub fn mark_valid(&mut self) {
        self.valid = true;
        self.error = None;
    }

    pub fn mark_invalid(
        &mut self,
        message: impl Into<String>,
    ) {
        self.valid = false;
        self.error = Some(message.into());
    }
}
