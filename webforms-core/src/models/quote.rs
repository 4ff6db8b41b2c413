//! The computed price breakdown for a prospective project.

use rust_decimal::Decimal;
use serde::Serialize;

/// A named cost line of a [`Quote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteComponent {
    Base,
    Actions,
    Timeline,
    Domain,
    Emails,
    Logo,
    Media,
}

impl QuoteComponent {
    /// All components in breakdown order.
    pub const ALL: [QuoteComponent; 7] = [
        QuoteComponent::Base,
        QuoteComponent::Actions,
        QuoteComponent::Timeline,
        QuoteComponent::Domain,
        QuoteComponent::Emails,
        QuoteComponent::Logo,
        QuoteComponent::Media,
    ];

    /// Row label used in the rendered cost breakdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Base => "Base Website",
            Self::Actions => "Features & Actions",
            Self::Timeline => "Rush Delivery",
            Self::Domain => "Domain Registration",
            Self::Emails => "Professional Emails",
            Self::Logo => "Logo Design",
            Self::Media => "Stock Photos/Videos",
        }
    }
}

/// Price breakdown plus derived total.
///
/// Components can only be set through [`Quote::with_component`], which
/// recomputes `total` every time, so `total` always equals the sum of the
/// components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    #[serde(with = "super::amount")]
    base: Decimal,
    #[serde(with = "super::amount")]
    actions: Decimal,
    #[serde(with = "super::amount")]
    timeline: Decimal,
    #[serde(with = "super::amount")]
    domain: Decimal,
    #[serde(with = "super::amount")]
    emails: Decimal,
    #[serde(with = "super::amount")]
    logo: Decimal,
    #[serde(with = "super::amount")]
    media: Decimal,
    #[serde(with = "super::amount")]
    total: Decimal,
}

impl Quote {
    /// A quote with only the base price; every other component is zero.
    pub fn new(base: Decimal) -> Self {
        Self {
            base,
            actions: Decimal::ZERO,
            timeline: Decimal::ZERO,
            domain: Decimal::ZERO,
            emails: Decimal::ZERO,
            logo: Decimal::ZERO,
            media: Decimal::ZERO,
            total: base,
        }
    }

    /// Returns a copy with `component` set to `amount` and the total refreshed.
    pub fn with_component(
        mut self,
        component: QuoteComponent,
        amount: Decimal,
    ) -> Self {
        *self.slot(component) = amount;
        self.total = self.component_sum();
        self
    }

    pub fn get(
        &self,
        component: QuoteComponent,
    ) -> Decimal {
        match component {
            QuoteComponent::Base => self.base,
            QuoteComponent::Actions => self.actions,
            QuoteComponent::Timeline => self.timeline,
            QuoteComponent::Domain => self.domain,
            QuoteComponent::Emails => self.emails,
            QuoteComponent::Logo => self.logo,
            QuoteComponent::Media => self.media,
        }
    }

    pub fn base(&self) -> Decimal {
        self.base
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Components in breakdown order, paired with their amounts.
    pub fn components(&self) -> impl Iterator<Item = (QuoteComponent, Decimal)> + '_ {
        QuoteComponent::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Serializes the quote the way the `breakdown` payload field carries it.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Saturates at `Decimal::MAX` / `Decimal::MIN` rather than overflowing.
    fn component_sum(&self) -> Decimal {
        QuoteComponent::ALL
            .into_iter()
            .map(|c| self.get(c))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    fn slot(
        &mut self,
        component: QuoteComponent,
    ) -> &mut Decimal {
        match component {
            QuoteComponent::Base => &mut self.base,
            QuoteComponent::Actions => &mut self.actions,
            QuoteComponent::Timeline => &mut self.timeline,
            QuoteComponent::Domain => &mut self.domain,
            QuoteComponent::Emails => &mut self.emails,
            QuoteComponent::Logo => &mut self.logo,
            QuoteComponent::Media => &mut self.media,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_quote_totals_to_base() {
        let quote = Quote::new(dec!(10000));

        assert_eq!(quote.total(), dec!(10000));
        assert_eq!(quote.get(QuoteComponent::Actions), Decimal::ZERO);
    }

    #[test]
    fn with_component_keeps_total_in_sync() {
        let quote = Quote::new(dec!(10000))
            .with_component(QuoteComponent::Actions, dec!(7000))
            .with_component(QuoteComponent::Logo, dec!(3000))
            .with_component(QuoteComponent::Actions, dec!(2000));

        assert_eq!(quote.get(QuoteComponent::Actions), dec!(2000));
        assert_eq!(quote.total(), dec!(15000));
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let quote = Quote::new(Decimal::MAX)
            .with_component(QuoteComponent::Actions, dec!(5000))
            .with_component(QuoteComponent::Media, Decimal::MAX);

        assert_eq!(quote.total(), Decimal::MAX);
    }

    #[test]
    fn components_are_listed_in_breakdown_order() {
        let labels: Vec<_> = Quote::new(dec!(1))
            .components()
            .map(|(c, _)| c.label())
            .collect();

        assert_eq!(
            labels,
            vec![
                "Base Website",
                "Features & Actions",
                "Rush Delivery",
                "Domain Registration",
                "Professional Emails",
                "Logo Design",
                "Stock Photos/Videos",
            ]
        );
    }

    #[test]
    fn to_json_writes_whole_amounts_as_integers() {
        let quote = Quote::new(dec!(10000)).with_component(QuoteComponent::Media, dec!(2500));

        let json = quote.to_json().unwrap();

        assert_eq!(
            json,
            r#"{"base":10000,"actions":0,"timeline":0,"domain":0,"emails":0,"logo":0,"media":2500,"total":12500}"#
        );
    }

    #[test]
    fn to_json_writes_fractional_amounts_as_floats() {
        let quote = Quote::new(dec!(99.5));

        let value: serde_json::Value = serde_json::from_str(&quote.to_json().unwrap()).unwrap();

        assert_eq!(value["base"], serde_json::json!(99.5));
        assert_eq!(value["total"], serde_json::json!(99.5));
    }
}
