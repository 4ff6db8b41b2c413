/// A change reported by the front end for a single input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChange {
    /// A text input, textarea or select now holds `value`.
    Text { field: String, value: String },
    /// A checkbox with value `option` in group `field` was checked or
    /// unchecked.
    Toggle {
        field: String,
        option: String,
        checked: bool,
    },
}

impl InputChange {
    pub fn text(
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Text {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn toggle(
        field: impl Into<String>,
        option: impl Into<String>,
        checked: bool,
    ) -> Self {
        Self::Toggle {
            field: field.into(),
            option: option.into(),
            checked,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::Text { field, .. } | Self::Toggle { field, .. } => field,
        }
    }
}

/// Everything a form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Input(InputChange),
    /// Focus left the named field.
    Blur(String),
    Submit,
}

impl From<InputChange> for FormEvent {
    fn from(change: InputChange) -> Self {
        Self::Input(change)
    }
}
