use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::parse_cost;
use crate::{
    config::{PricedOption, PricingConfig},
    models::{Category, Quote, QuoteComponent, Selections},
};

/// A configured option with its annotation already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PricedEntry {
    value: String,
    cost: Decimal,
}

impl From<&PricedOption> for PricedEntry {
    fn from(option: &PricedOption) -> Self {
        Self {
            value: option.value.clone(),
            cost: parse_cost(option.cost.as_deref()),
        }
    }
}

/// Computes a [`Quote`] from the current [`Selections`].
///
/// The engine holds no quote of its own. [`PricingEngine::recompute`] is a
/// pure function of the selections, rebuilt from scratch on every call.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use webforms_core::{Category, PricingEngine, config::{PricedOption, PricingConfig}};
///
/// let mut config = PricingConfig::default();
/// config.actions.push(PricedOption::new("Online Booking", "5000"));
/// config.categories.timeline.options = vec![
///     PricedOption::new("Standard", "0"),
///     PricedOption::new("Rush", "7000"),
/// ];
///
/// let engine = PricingEngine::new(config);
/// let mut selections = engine.initial_selections();
/// selections.toggle_action("Online Booking", true);
/// selections.select(Category::Timeline, "Rush");
///
/// assert_eq!(engine.recompute(&selections).total(), dec!(22000));
/// ```
#[derive(Debug, Clone)]
pub struct PricingEngine {
    base_price: Decimal,
    actions: Vec<PricedEntry>,
    categories: Vec<(Category, Vec<PricedEntry>)>,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        let actions = config.actions.iter().map(PricedEntry::from).collect();
        let categories = Category::ALL
            .into_iter()
            .map(|category| {
                let entries = config
                    .categories
                    .get(category)
                    .options
                    .iter()
                    .map(PricedEntry::from)
                    .collect();
                (category, entries)
            })
            .collect();

        Self {
            base_price: config.base_price,
            actions,
            categories,
        }
    }

    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    /// Selections of a freshly rendered form: nothing checked, each category
    /// on its first option.
    pub fn initial_selections(&self) -> Selections {
        let mut selections = Selections::new();
        for (category, entries) in &self.categories {
            if let Some(first) = entries.first() {
                selections.select(*category, first.value.clone());
            }
        }
        selections
    }

    /// Rebuilds the full quote from the selections.
    pub fn recompute(
        &self,
        selections: &Selections,
    ) -> Quote {
        let actions: Decimal = selections
            .checked_actions()
            .map(|value| self.action_cost(value))
            .fold(Decimal::ZERO, Decimal::saturating_add);

        let quote = Category::ALL.into_iter().fold(
            Quote::new(self.base_price).with_component(QuoteComponent::Actions, actions),
            |quote, category| {
                let cost = selections
                    .selected(category)
                    .map(|value| self.option_cost(category, value))
                    .unwrap_or(Decimal::ZERO);
                quote.with_component(category.component(), cost)
            },
        );

        debug!(total = %quote.total(), "quote recomputed");
        quote
    }

    /// Cost of an action checkbox; unknown actions cost nothing.
    pub fn action_cost(
        &self,
        value: &str,
    ) -> Decimal {
        match self.actions.iter().find(|entry| entry.value == value) {
            Some(entry) => entry.cost,
            None => {
                warn!(action = value, "unknown action checked; pricing as zero");
                Decimal::ZERO
            }
        }
    }

    /// Cost of a category option; unknown options cost nothing.
    pub fn option_cost(
        &self,
        category: Category,
        value: &str,
    ) -> Decimal {
        let found = self
            .entries(category)
            .iter()
            .find(|entry| entry.value == value);
        match found {
            Some(entry) => entry.cost,
            None => {
                warn!(
                    category = category.field_id(),
                    option = value,
                    "unknown option selected; pricing as zero"
                );
                Decimal::ZERO
            }
        }
    }

    /// Values of the checked actions in configured display order. Checked
    /// values that are not configured follow in the order they were checked.
    pub fn visitor_actions(
        &self,
        selections: &Selections,
    ) -> Vec<String> {
        let configured = self
            .actions
            .iter()
            .filter(|entry| selections.is_checked(&entry.value))
            .map(|entry| entry.value.clone());
        let unknown = selections
            .checked_actions()
            .filter(|value| !self.actions.iter().any(|entry| entry.value == *value))
            .map(str::to_string);

        configured.chain(unknown).collect()
    }

    /// Option values configured for a category, in display order.
    pub fn options(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &str> {
        self.entries(category).iter().map(|entry| entry.value.as_str())
    }

    /// Configured action values, in display order.
    pub fn action_values(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|entry| entry.value.as_str())
    }

    fn entries(
        &self,
        category: Category,
    ) -> &[PricedEntry] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }
}
