//! Quote request form fields and the submission payload.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{Category, FieldKind, FieldSpec, Quote, Selections, contact::or_default};

const DOMAINS_DEFAULT: &str = "Not specified";
const REFERENCES_DEFAULT: &str = "None provided";

/// Free-text fields of the quote form. The pricing selectors are
/// [`Category`] values and the feature checkboxes live in [`Selections`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuoteField {
    Name,
    Mobile,
    CompanyName,
    TargetAudience,
    Budget,
    Domains,
    References,
}

impl QuoteField {
    pub const ALL: [QuoteField; 7] = [
        QuoteField::Name,
        QuoteField::Mobile,
        QuoteField::CompanyName,
        QuoteField::TargetAudience,
        QuoteField::Budget,
        QuoteField::Domains,
        QuoteField::References,
    ];

    pub fn id(&self) -> &'static str {
        self.spec().id
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    /// The quote form only enforces presence; no format rules apply.
    pub fn spec(&self) -> FieldSpec {
        match self {
            Self::Name => FieldSpec::required("name", FieldKind::Text),
            Self::Mobile => FieldSpec::required("mobile", FieldKind::Text),
            Self::CompanyName => FieldSpec::optional("companyName", FieldKind::Text),
            Self::TargetAudience => FieldSpec::required("targetAudience", FieldKind::Text),
            Self::Budget => FieldSpec::required("budget", FieldKind::Text),
            Self::Domains => FieldSpec::optional("domains", FieldKind::Text),
            Self::References => FieldSpec::optional("references", FieldKind::Text),
        }
    }
}

/// Live state of the quote form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteForm {
    text: BTreeMap<QuoteField, String>,
    pub selections: Selections,
}

impl QuoteForm {
    pub fn new(selections: Selections) -> Self {
        Self {
            text: BTreeMap::new(),
            selections,
        }
    }

    pub fn value(
        &self,
        field: QuoteField,
    ) -> &str {
        self.text.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(
        &mut self,
        field: QuoteField,
        value: impl Into<String>,
    ) {
        self.text.insert(field, value.into());
    }

    pub fn selected(
        &self,
        category: Category,
    ) -> &str {
        self.selections.selected(category).unwrap_or("")
    }

    /// Every required field paired with its current value, text fields first,
    /// then the five selectors.
    pub fn required_values(&self) -> Vec<(FieldSpec, &str)> {
        let text = QuoteField::ALL
            .into_iter()
            .map(|f| (f.spec(), self.value(f)));
        let selectors = Category::ALL
            .into_iter()
            .map(|c| (FieldSpec::required(c.field_id(), FieldKind::Text), self.selected(c)));

        text.chain(selectors).filter(|(spec, _)| spec.required).collect()
    }

    /// Builds the payload from the form, the current quote and the checked
    /// action labels (already in display order).
    pub fn submission(
        &self,
        quote: &Quote,
        visitor_actions: &[String],
        timestamp: impl Into<String>,
    ) -> Result<QuoteSubmission, serde_json::Error> {
        Ok(QuoteSubmission {
            timestamp: timestamp.into(),
            name: self.value(QuoteField::Name).to_string(),
            mobile: self.value(QuoteField::Mobile).to_string(),
            company_name: self.value(QuoteField::CompanyName).to_string(),
            target_audience: self.value(QuoteField::TargetAudience).to_string(),
            visitor_actions: visitor_actions.join(", "),
            timeline: self.selected(Category::Timeline).to_string(),
            budget: self.value(QuoteField::Budget).to_string(),
            domains: or_default(self.value(QuoteField::Domains), DOMAINS_DEFAULT),
            domain_status: self.selected(Category::DomainStatus).to_string(),
            emails: self.selected(Category::Emails).to_string(),
            references: or_default(self.value(QuoteField::References), REFERENCES_DEFAULT),
            logo_status: self.selected(Category::LogoStatus).to_string(),
            media: self.selected(Category::Media).to_string(),
            calculated_quote: quote.total(),
            breakdown: quote.to_json()?,
        })
    }
}

/// JSON body sent to the quote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    pub timestamp: String,
    pub name: String,
    pub mobile: String,
    pub company_name: String,
    pub target_audience: String,
    pub visitor_actions: String,
    pub timeline: String,
    pub budget: String,
    pub domains: String,
    pub domain_status: String,
    pub emails: String,
    pub references: String,
    pub logo_status: String,
    pub media: String,
    #[serde(with = "super::amount")]
    pub calculated_quote: Decimal,
    pub breakdown: String,
}
