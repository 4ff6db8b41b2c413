use std::fmt::Write;

use rust_decimal::Decimal;

use super::{RUPEE, format_inr};
use crate::models::{Quote, QuoteComponent};

/// Text for the headline quote amount (no currency symbol; the page
/// renders it next to the amount).
pub fn render_amount(quote: &Quote) -> String {
    format_inr(quote.total())
}

/// Cost breakdown markup.
///
/// The base row is always present; other components only appear when they
/// are positive. A bold total row closes the list.
pub fn render_breakdown(quote: &Quote) -> String {
    let mut html = String::from("<h4>Cost Breakdown</h4>");

    for (component, amount) in quote.components() {
        if component == QuoteComponent::Base || amount > Decimal::ZERO {
            push_row(&mut html, component.label(), amount, false);
        }
    }
    push_row(&mut html, "Total Estimate", quote.total(), true);

    html
}

fn push_row(
    html: &mut String,
    label: &str,
    amount: Decimal,
    strong: bool,
) {
    let label = escape(label);
    let amount = format!("{RUPEE}{}", format_inr(amount));
    // Writing to a String cannot fail.
    let _ = if strong {
        write!(
            html,
            r#"<div class="breakdown-item"><span><strong>{label}</strong></span><span><strong>{amount}</strong></span></div>"#
        )
    } else {
        write!(
            html,
            r#"<div class="breakdown-item"><span>{label}</span><span>{amount}</span></div>"#
        )
    };
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn base_only_quote_has_base_and_total_rows() {
        let html = render_breakdown(&Quote::new(dec!(10000)));

        assert_eq!(
            html,
            concat!(
                "<h4>Cost Breakdown</h4>",
                r#"<div class="breakdown-item"><span>Base Website</span><span>₹10,000</span></div>"#,
                r#"<div class="breakdown-item"><span><strong>Total Estimate</strong></span><span><strong>₹10,000</strong></span></div>"#,
            )
        );
    }

    #[test]
    fn zero_components_are_omitted() {
        let quote = Quote::new(dec!(10000)).with_component(QuoteComponent::Logo, dec!(3000));

        let html = render_breakdown(&quote);

        assert!(html.contains("<span>Logo Design</span><span>₹3,000</span>"));
        assert!(!html.contains("Rush Delivery"));
        assert!(!html.contains("Features &amp; Actions"));
        assert!(html.contains("<strong>₹13,000</strong>"));
    }

    #[test]
    fn every_positive_component_appears_in_order() {
        let quote = QuoteComponent::ALL
            .into_iter()
            .skip(1)
            .fold(Quote::new(dec!(10000)), |q, c| q.with_component(c, dec!(1000)));

        let html = render_breakdown(&quote);

        let positions: Vec<_> = [
            "Base Website",
            "Features &amp; Actions",
            "Rush Delivery",
            "Domain Registration",
            "Professional Emails",
            "Logo Design",
            "Stock Photos/Videos",
            "Total Estimate",
        ]
        .iter()
        .map(|label| html.find(label).expect("label present"))
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(html.contains("<strong>₹16,000</strong>"));
    }

    #[test]
    fn amount_uses_indian_grouping() {
        let quote = Quote::new(dec!(10000)).with_component(QuoteComponent::Actions, dec!(95000));

        assert_eq!(render_amount(&quote), "1,05,000");
    }
}
