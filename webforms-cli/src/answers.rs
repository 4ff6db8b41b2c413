use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use webforms_core::{FormEvent, FormKind, InputChange};

const ACTIONS_FIELD: &str = "actions";
const NEWSLETTER_FIELD: &str = "newsletter";
const NEWSLETTER_OPTION: &str = "yes";

/// A visitor's answers to one form.
///
/// ```toml
/// actions = ["Online Booking", "WhatsApp Chat"]
/// newsletter = true
///
/// [fields]
/// name = "Asha Rao"
/// timeline = "Rush"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Answers {
    pub fields: BTreeMap<String, String>,
    pub actions: Vec<String>,
    pub newsletter: Option<bool>,
}

impl Answers {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Failed to parse answers")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid answers file: {}", path.display()))
    }

    /// The events a visitor filling in `form` would produce.
    ///
    /// Each text answer is an input followed by leaving the field. Actions
    /// only apply to the quote form and the newsletter box only to the
    /// contact form.
    pub fn events(
        &self,
        form: FormKind,
    ) -> Vec<FormEvent> {
        let mut events = Vec::new();

        for (field, value) in &self.fields {
            events.push(InputChange::text(field.as_str(), value.as_str()).into());
            events.push(FormEvent::Blur(field.clone()));
        }

        match form {
            FormKind::Quote => {
                for action in &self.actions {
                    events.push(InputChange::toggle(ACTIONS_FIELD, action.as_str(), true).into());
                }
            }
            FormKind::Contact => {
                if let Some(checked) = self.newsletter {
                    events.push(
                        InputChange::toggle(NEWSLETTER_FIELD, NEWSLETTER_OPTION, checked).into(),
                    );
                }
            }
        }

        events
    }
}
