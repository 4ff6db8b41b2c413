//! Contact form fields, their typed accessors and the submission payload.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{FieldKind, FieldSpec, FieldState};

const COMPANY_NAME_DEFAULT: &str = "Not provided";
const TIMELINE_DEFAULT: &str = "Not specified";
const NEWSLETTER_OPT_IN: &str = "yes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    BusinessType,
    CompanyName,
    Timeline,
    Message,
    Newsletter,
}

impl ContactField {
    pub const ALL: [ContactField; 8] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::BusinessType,
        ContactField::CompanyName,
        ContactField::Timeline,
        ContactField::Message,
        ContactField::Newsletter,
    ];

    /// Fields checked when the whole form is validated before submit.
    pub const VALIDATED: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::BusinessType,
        ContactField::Message,
    ];

    pub fn id(&self) -> &'static str {
        self.spec().id
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    pub fn spec(&self) -> FieldSpec {
        match self {
            Self::Name => FieldSpec::required("name", FieldKind::Text),
            Self::Email => FieldSpec::required("email", FieldKind::Email),
            Self::Phone => FieldSpec::required("phone", FieldKind::Phone),
            Self::BusinessType => FieldSpec::required("businessType", FieldKind::Text),
            Self::CompanyName => FieldSpec::optional("companyName", FieldKind::Text),
            Self::Timeline => FieldSpec::optional("timeline", FieldKind::Text),
            Self::Message => FieldSpec::required("message", FieldKind::Message),
            Self::Newsletter => FieldSpec::optional("newsletter", FieldKind::Checkbox),
        }
    }
}

/// Live state of every contact field.
///
/// Values are kept raw (untrimmed); the validator trims on its own and the
/// payload carries what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: BTreeMap<ContactField, FieldState>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(
        &self,
        field: ContactField,
    ) -> &str {
        self.fields
            .get(&field)
            .map(|state| state.value.as_str())
            .unwrap_or("")
    }

    pub fn set(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) {
        self.state_mut(field).set_value(value);
    }

    /// Records the newsletter checkbox. Only the opt-in option counts as "Yes".
    pub fn set_newsletter(
        &mut self,
        option: &str,
        checked: bool,
    ) {
        let value = if checked { option } else { "" };
        self.set(ContactField::Newsletter, value);
    }

    pub fn state(
        &self,
        field: ContactField,
    ) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    pub fn state_mut(
        &mut self,
        field: ContactField,
    ) -> &mut FieldState {
        self.fields.entry(field).or_default()
    }

    /// Clears every value and validation result.
    pub fn reset(&mut self) {
        self.fields.clear();
    }

    /// Builds the payload, applying the per-field defaults.
    pub fn submission(
        &self,
        timestamp: impl Into<String>,
    ) -> ContactSubmission {
        ContactSubmission {
            name: self.value(ContactField::Name).to_string(),
            email: self.value(ContactField::Email).to_string(),
            phone: self.value(ContactField::Phone).to_string(),
            business_type: self.value(ContactField::BusinessType).to_string(),
            company_name: or_default(self.value(ContactField::CompanyName), COMPANY_NAME_DEFAULT),
            timeline: or_default(self.value(ContactField::Timeline), TIMELINE_DEFAULT),
            message: self.value(ContactField::Message).to_string(),
            newsletter: if self.value(ContactField::Newsletter) == NEWSLETTER_OPT_IN {
                "Yes".to_string()
            } else {
                "No".to_string()
            },
            timestamp: timestamp.into(),
        }
    }
}

/// JSON body sent to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub company_name: String,
    pub timeline: String,
    pub message: String,
    pub newsletter: String,
    pub timestamp: String,
}

pub(crate) fn or_default(
    value: &str,
    default: &str,
) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
