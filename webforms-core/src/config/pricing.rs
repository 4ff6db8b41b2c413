//! Pricing configuration: base price, action checkboxes and the options of
//! each category selector, each carrying a raw cost annotation.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::models::Category;

pub const DEFAULT_BASE_PRICE: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub base_price: Decimal,
    pub actions: Vec<PricedOption>,
    pub categories: CategoryTable,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: Decimal::from(DEFAULT_BASE_PRICE),
            actions: Vec::new(),
            categories: CategoryTable::default(),
        }
    }
}

/// One selectable option: the value submitted with the form and its cost
/// annotation, kept raw so malformed costs can fall back to zero.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PricedOption {
    pub value: String,
    #[serde(default, deserialize_with = "deserialize_cost_annotation")]
    pub cost: Option<String>,
}

impl PricedOption {
    pub fn new(
        value: impl Into<String>,
        cost: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            cost: Some(cost.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryOptions {
    #[serde(default)]
    pub options: Vec<PricedOption>,
}

/// Options for each of the five selectors, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryTable {
    pub timeline: CategoryOptions,
    pub domain_status: CategoryOptions,
    pub emails: CategoryOptions,
    pub logo_status: CategoryOptions,
    pub media: CategoryOptions,
}

impl CategoryTable {
    pub fn get(
        &self,
        category: Category,
    ) -> &CategoryOptions {
        match category {
            Category::Timeline => &self.timeline,
            Category::DomainStatus => &self.domain_status,
            Category::Emails => &self.emails,
            Category::LogoStatus => &self.logo_status,
            Category::Media => &self.media,
        }
    }
}

/// Accepts a cost written as a TOML string, integer or float and keeps its
/// textual form.
fn deserialize_cost_annotation<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCost {
        Integer(i64),
        Float(f64),
        Text(String),
    }

    let raw: Option<RawCost> = Option::deserialize(deserializer)?;
    Ok(raw.map(|cost| match cost {
        RawCost::Integer(i) => i.to_string(),
        RawCost::Float(f) => f.to_string(),
        RawCost::Text(s) => s,
    }))
}
