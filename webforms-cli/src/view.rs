use std::io::{self, Stdout, Write};

use tracing::{debug, trace};
use webforms_core::{
    FormPhase, FormView,
    render::{Banner, RUPEE},
};

/// A [`FormView`] that writes to a terminal.
///
/// Field errors and banners are printed as they arrive. The quote is only
/// remembered, since it changes on every replayed answer; call
/// [`ConsoleView::write_quote`] to print the latest one.
pub struct ConsoleView<W: Write = Stdout> {
    out: W,
    quote: Option<(String, String)>,
}

impl ConsoleView {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out, quote: None }
    }

    pub fn latest_quote(&self) -> Option<(&str, &str)> {
        self.quote
            .as_ref()
            .map(|(amount, html)| (amount.as_str(), html.as_str()))
    }

    pub fn write_quote(&mut self) -> io::Result<()> {
        if let Some((amount, html)) = &self.quote {
            writeln!(self.out, "Estimated quote: {RUPEE}{amount}")?;
            writeln!(self.out)?;
            writeln!(self.out, "{}", markup_to_text(html))?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(
        &mut self,
        text: &str,
    ) {
        if let Err(e) = writeln!(self.out, "{text}") {
            debug!(error = %e, "console write failed");
        }
    }
}

impl<W: Write> FormView for ConsoleView<W> {
    fn show_field_error(
        &mut self,
        field: &str,
        message: &str,
    ) {
        self.line(&format!("  {field}: {message}"));
    }

    fn clear_field_error(
        &mut self,
        field: &str,
    ) {
        trace!(field, "field error cleared");
    }

    fn clear_messages(&mut self) {}

    fn show_banner(
        &mut self,
        banner: &Banner,
    ) {
        let text = if banner.is_html {
            markup_to_text(&banner.body)
        } else {
            banner.body.clone()
        };
        self.line(&text);
    }

    fn set_submit_enabled(
        &mut self,
        enabled: bool,
    ) {
        debug!(enabled, "submit control");
    }

    fn show_quote(
        &mut self,
        amount: &str,
        breakdown_html: &str,
    ) {
        debug!(amount, "quote updated");
        self.quote = Some((amount.to_string(), breakdown_html.to_string()));
    }

    fn phase_changed(
        &mut self,
        phase: FormPhase,
    ) {
        trace!(?phase, "phase changed");
    }
}

/// Flattens banner and breakdown markup into plain lines.
pub fn markup_to_text(html: &str) -> String {
    let spaced = html
        .replace("<br>", "\n")
        .replace("</h4>", "\n")
        .replace("</div>", "\n")
        .replace("</span><span>", "  ");

    let mut text = String::with_capacity(spaced.len());
    let mut in_tag = false;
    for ch in spaced.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use webforms_core::{PricingEngine, Selections, config::PricingConfig};

    use super::*;

    fn output(view: ConsoleView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn breakdown_markup_flattens_to_rows() {
        let html = "<h4>Cost Breakdown</h4>\
            <div class=\"breakdown-item\"><span>Base Website</span><span>₹10,000</span></div>\
            <div class=\"breakdown-item\"><span>Features &amp; Actions</span><span>₹5,000</span></div>\
            <div class=\"breakdown-item\"><span><strong>Total Estimate</strong></span><span><strong>₹15,000</strong></span></div>";

        assert_eq!(
            markup_to_text(html),
            "Cost Breakdown\n\
             Base Website  ₹10,000\n\
             Features & Actions  ₹5,000\n\
             Total Estimate  ₹15,000"
        );
    }

    #[test]
    fn html_banner_is_printed_as_text() {
        let mut view = ConsoleView::new(Vec::new());
        let quote = PricingEngine::new(PricingConfig::default()).recompute(&Selections::new());

        view.show_banner(&Banner::quote_success(&quote, Duration::from_secs(15)));

        let printed = output(view);
        assert!(printed.starts_with("✓ Quote Request Received!\nYour estimated quote is ₹10,000."));
        assert!(!printed.contains('<'));
    }

    #[test]
    fn field_errors_are_printed_immediately() {
        let mut view = ConsoleView::new(Vec::new());

        view.show_field_error("email", "Please enter a valid email address");
        view.clear_field_error("email");

        assert_eq!(output(view), "  email: Please enter a valid email address\n");
    }

    #[test]
    fn only_the_latest_quote_is_written() {
        let mut view = ConsoleView::new(Vec::new());

        view.show_quote("10,000", "<h4>Cost Breakdown</h4>");
        view.show_quote("15,000", "<h4>Cost Breakdown</h4>");
        view.write_quote().unwrap();

        assert_eq!(output(view), "Estimated quote: ₹15,000\n\nCost Breakdown\n");
    }
}
