use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::{debug, error};

use super::{
    FormController, FormPhase, FormView, InputChange, SubmitOutcome,
    lifecycle::{Lifecycle, deliver},
    reflect_validation,
};
use crate::{
    config::SiteConfig,
    models::{Category, FormKind, Quote, QuoteField, QuoteForm},
    pricing::PricingEngine,
    render::{Banner, render_amount, render_breakdown},
    submit::{Clock, SubmissionError, Submitter, SystemClock},
    validation::validate_all,
};

const ACTIONS_FIELD: &str = "actions";

/// Drives the quote calculator: keeps the quote current as selections
/// change and submits the request together with the computed price.
pub struct QuoteFormController {
    engine: PricingEngine,
    fields: QuoteForm,
    quote: Quote,
    submitter: Arc<dyn Submitter>,
    clock: Arc<dyn Clock>,
    endpoint: String,
    banner_delay: Duration,
    lifecycle: Lifecycle,
}

impl QuoteFormController {
    pub fn new(
        config: &SiteConfig,
        submitter: Arc<dyn Submitter>,
    ) -> Self {
        let engine = PricingEngine::new(config.pricing.clone());
        let fields = QuoteForm::new(engine.initial_selections());
        let quote = engine.recompute(&fields.selections);

        Self {
            engine,
            fields,
            quote,
            submitter,
            clock: Arc::new(SystemClock),
            endpoint: config.endpoints.quote.clone(),
            banner_delay: config.display.success_banner_delay(FormKind::Quote),
            lifecycle: Lifecycle::new(FormKind::Quote),
        }
    }

    pub fn with_clock(
        mut self,
        clock: Arc<dyn Clock>,
    ) -> Self {
        self.clock = clock;
        self
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn fields(&self) -> &QuoteForm {
        &self.fields
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    /// Shows the quote for the initial selections.
    pub fn render_initial(
        &self,
        view: &mut dyn FormView,
    ) {
        self.render_quote(view);
    }

    pub async fn submit(
        &mut self,
        view: &mut dyn FormView,
    ) -> SubmitOutcome {
        if self.lifecycle.is_submitting() {
            debug!("quote submission already in flight");
            return SubmitOutcome::Busy;
        }

        view.clear_messages();
        self.lifecycle.enter(FormPhase::Validating, view);

        let validation = validate_all(self.fields.required_values());
        reflect_validation(&validation, view);
        if !validation.is_valid() {
            self.lifecycle.finish(FormPhase::Invalid, view);
            return SubmitOutcome::Invalid(validation.errors().to_vec());
        }

        self.lifecycle.begin_submit(view);
        let result = self.send().await;

        let outcome = match result {
            Ok(()) => {
                view.show_banner(&Banner::quote_success(&self.quote, self.banner_delay));
                self.lifecycle.finish(FormPhase::Succeeded, view);
                SubmitOutcome::Sent
            }
            Err(e) => {
                error!(error = %e, "error submitting quote");
                view.show_banner(&Banner::quote_failure());
                self.lifecycle.finish(FormPhase::Failed, view);
                SubmitOutcome::Failed(e.to_string())
            }
        };
        self.lifecycle.end_submit(view);

        outcome
    }

    async fn send(&self) -> Result<(), SubmissionError> {
        let actions = self.engine.visitor_actions(&self.fields.selections);
        let payload = self
            .fields
            .submission(&self.quote, &actions, self.clock.timestamp())?;
        deliver(
            self.submitter.as_ref(),
            FormKind::Quote,
            &self.endpoint,
            &payload,
        )
        .await
    }

    fn reprice(
        &mut self,
        view: &mut dyn FormView,
    ) {
        self.quote = self.engine.recompute(&self.fields.selections);
        self.render_quote(view);
    }

    fn render_quote(
        &self,
        view: &mut dyn FormView,
    ) {
        view.show_quote(&render_amount(&self.quote), &render_breakdown(&self.quote));
    }
}

#[async_trait(?Send)]
impl FormController for QuoteFormController {
    fn form(&self) -> FormKind {
        FormKind::Quote
    }

    fn phase(&self) -> FormPhase {
        self.lifecycle.phase()
    }

    fn handle_input(
        &mut self,
        change: &InputChange,
        view: &mut dyn FormView,
    ) {
        match change {
            InputChange::Text { field, value } => {
                if let Some(category) = Category::parse(field) {
                    self.fields.selections.select(category, value.clone());
                    self.reprice(view);
                } else if let Some(field) = QuoteField::parse(field) {
                    self.fields.set(field, value.clone());
                } else {
                    debug!(field = %field, "ignoring input for unknown quote field");
                }
            }
            InputChange::Toggle {
                field,
                option,
                checked,
            } if field == ACTIONS_FIELD => {
                self.fields.selections.toggle_action(option, *checked);
                self.reprice(view);
            }
            InputChange::Toggle { field, .. } => {
                debug!(field = %field, "ignoring toggle for unknown quote field");
            }
        }
    }

    fn handle_blur(
        &mut self,
        _field: &str,
        _view: &mut dyn FormView,
    ) {
    }

    async fn handle_submit(
        &mut self,
        view: &mut dyn FormView,
    ) -> SubmitOutcome {
        self.submit(view).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        config::{DEFAULT_QUOTE_ENDPOINT, PricedOption},
        controller::test_support::{FakeSubmitter, FixedClock, RecordingView, StalledSubmitter},
        render::BannerKind,
    };

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        let pricing = &mut config.pricing;
        pricing.actions = vec![
            PricedOption::new("Contact Form", "2000"),
            PricedOption::new("Online Booking", "5000"),
            PricedOption::new("Photo Gallery", "oops"),
        ];
        pricing.categories.timeline.options = vec![
            PricedOption::new("Standard", "0"),
            PricedOption::new("Rush", "7000"),
        ];
        pricing.categories.domain_status.options = vec![
            PricedOption::new("Have a domain", "0"),
            PricedOption::new("Need a domain", "1000"),
        ];
        pricing.categories.emails.options = vec![
            PricedOption::new("None", "0"),
            PricedOption::new("1-5", "1500"),
        ];
        pricing.categories.logo_status.options = vec![
            PricedOption::new("Have a logo", "0"),
            PricedOption::new("Need a logo", "3000"),
        ];
        pricing.categories.media.options = vec![
            PricedOption::new("I'll provide", "0"),
            PricedOption::new("Stock photos", "2000"),
        ];
        config
    }

    fn controller(submitter: Arc<FakeSubmitter>) -> QuoteFormController {
        QuoteFormController::new(&test_config(), submitter).with_clock(Arc::new(FixedClock))
    }

    fn fill_required(
        controller: &mut QuoteFormController,
        view: &mut RecordingView,
    ) {
        for (field, value) in [
            ("name", "Vikram Shah"),
            ("mobile", "9876543210"),
            ("targetAudience", "Young professionals"),
            ("budget", "20000-30000"),
        ] {
            controller.handle_input(&InputChange::text(field, value), view);
        }
    }

    // =========================================================================
    // pricing on input
    // =========================================================================

    #[test]
    fn initial_render_shows_base_price() {
        let mut view = RecordingView::default();
        let controller = controller(Arc::new(FakeSubmitter::default()));

        controller.render_initial(&mut view);

        assert_eq!(controller.quote().total(), dec!(10000));
        assert_eq!(view.quotes.len(), 1);
        assert_eq!(view.quotes[0].0, "10,000");
        assert!(view.quotes[0].1.starts_with("<h4>Cost Breakdown</h4>"));
    }

    #[test]
    fn checking_actions_reprices() {
        let mut view = RecordingView::default();
        let mut controller = controller(Arc::new(FakeSubmitter::default()));

        controller.handle_input(&InputChange::toggle("actions", "Contact Form", true), &mut view);
        controller.handle_input(&InputChange::toggle("actions", "Online Booking", true), &mut view);
        controller.handle_input(&InputChange::toggle("actions", "Contact Form", false), &mut view);

        assert_eq!(controller.quote().total(), dec!(15000));
        let amounts: Vec<_> = view.quotes.iter().map(|(a, _)| a.as_str()).collect();
        assert_eq!(amounts, vec!["12,000", "17,000", "15,000"]);
    }

    #[test]
    fn selecting_category_options_reprices() {
        let mut view = RecordingView::default();
        let mut controller = controller(Arc::new(FakeSubmitter::default()));

        controller.handle_input(&InputChange::text("timeline", "Rush"), &mut view);
        controller.handle_input(&InputChange::text("logoStatus", "Need a logo"), &mut view);

        assert_eq!(controller.quote().total(), dec!(20000));
        let (_, breakdown) = view.quotes.last().unwrap();
        assert!(breakdown.contains("<span>Rush Delivery</span><span>₹7,000</span>"));
        assert!(breakdown.contains("<span>Logo Design</span><span>₹3,000</span>"));
    }

    #[test]
    fn malformed_cost_prices_as_zero() {
        let mut view = RecordingView::default();
        let mut controller = controller(Arc::new(FakeSubmitter::default()));

        controller.handle_input(&InputChange::toggle("actions", "Photo Gallery", true), &mut view);

        assert_eq!(controller.quote().total(), dec!(10000));
    }

    #[test]
    fn text_fields_do_not_reprice() {
        let mut view = RecordingView::default();
        let mut controller = controller(Arc::new(FakeSubmitter::default()));

        controller.handle_input(&InputChange::text("budget", "50000"), &mut view);
        controller.handle_input(&InputChange::text("favouriteColour", "teal"), &mut view);

        assert!(view.quotes.is_empty());
        assert_eq!(controller.fields().value(QuoteField::Budget), "50000");
    }

    // =========================================================================
    // submit
    // =========================================================================

    #[tokio::test]
    async fn missing_required_fields_block_submission() {
        let submitter = Arc::new(FakeSubmitter::default());
        let mut view = RecordingView::default();
        let mut controller = controller(submitter.clone());
        controller.handle_input(&InputChange::text("name", "Vikram"), &mut view);

        let outcome = controller.submit(&mut view).await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected invalid outcome, got {outcome:?}");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["mobile", "targetAudience", "budget"]);
        assert_eq!(submitter.calls(), 0);
        assert_eq!(view.error_for("budget"), Some("This field is required"));
    }

    #[tokio::test]
    async fn whitespace_only_answer_counts_as_missing() {
        let submitter = Arc::new(FakeSubmitter::default());
        let mut view = RecordingView::default();
        let mut controller = controller(submitter.clone());
        fill_required(&mut controller, &mut view);
        controller.handle_input(&InputChange::text("budget", "   "), &mut view);

        let outcome = controller.submit(&mut view).await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected invalid outcome, got {outcome:?}");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["budget"]);
        assert_eq!(submitter.calls(), 0);
    }

    #[tokio::test]
    async fn valid_submit_sends_once_with_quote() {
        let submitter = Arc::new(FakeSubmitter::default());
        let mut view = RecordingView::default();
        let mut controller = controller(submitter.clone());
        fill_required(&mut controller, &mut view);
        controller.handle_input(&InputChange::toggle("actions", "Online Booking", true), &mut view);
        controller.handle_input(&InputChange::toggle("actions", "Contact Form", true), &mut view);
        controller.handle_input(&InputChange::text("emails", "1-5"), &mut view);

        let outcome = controller.submit(&mut view).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(submitter.calls(), 1);
        assert_eq!(view.count_phase(FormPhase::Succeeded), 1);

        let (endpoint, payload) = submitter.last_payload().unwrap();
        assert_eq!(endpoint, DEFAULT_QUOTE_ENDPOINT);
        assert_eq!(payload["timestamp"], "2025-03-14T09:26:53.000Z");
        assert_eq!(payload["visitorActions"], "Contact Form, Online Booking");
        assert_eq!(payload["emails"], "1-5");
        assert_eq!(payload["timeline"], "Standard");
        assert_eq!(payload["domains"], "Not specified");
        assert_eq!(payload["references"], "None provided");
        assert_eq!(payload["calculatedQuote"], serde_json::json!(18500));
        assert_eq!(
            payload["breakdown"],
            r#"{"base":10000,"actions":7000,"timeline":0,"domain":0,"emails":1500,"logo":0,"media":0,"total":18500}"#
        );

        let banner = &view.banners[0];
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.auto_hide, Some(Duration::from_secs(15)));
        assert!(banner.body.contains("₹18,500"));
    }

    #[tokio::test]
    async fn success_keeps_quote_form_values() {
        let submitter = Arc::new(FakeSubmitter::default());
        let mut view = RecordingView::default();
        let mut controller = controller(submitter);
        fill_required(&mut controller, &mut view);

        controller.submit(&mut view).await;

        assert_eq!(view.resets, 0);
        assert_eq!(controller.fields().value(QuoteField::Name), "Vikram Shah");
    }

    #[tokio::test]
    async fn abandoned_submission_leaves_form_busy() {
        let submitter = Arc::new(StalledSubmitter::default());
        let mut view = RecordingView::default();
        let mut controller = QuoteFormController::new(&test_config(), submitter.clone());
        fill_required(&mut controller, &mut view);

        let stalled =
            tokio::time::timeout(Duration::from_millis(20), controller.submit(&mut view)).await;
        assert!(stalled.is_err());
        assert_eq!(view.phases, vec![FormPhase::Validating, FormPhase::Submitting]);
        assert_eq!(view.submit_enabled, vec![false]);

        let mut retry_view = RecordingView::default();
        let outcome = controller.submit(&mut retry_view).await;

        assert_eq!(outcome, SubmitOutcome::Busy);
        assert_eq!(submitter.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(controller.phase(), FormPhase::Submitting);
        assert!(retry_view.phases.is_empty());
        assert!(retry_view.banners.is_empty());
        assert!(retry_view.submit_enabled.is_empty());
        assert_eq!(retry_view.clears, 0);
    }

    #[tokio::test]
    async fn network_failure_fails_once_and_reenables_submit() {
        let submitter = FakeSubmitter::failing();
        let mut view = RecordingView::default();
        let mut controller = controller(submitter.clone());
        fill_required(&mut controller, &mut view);

        let outcome = controller.submit(&mut view).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed("network error: connection refused".to_string())
        );
        assert_eq!(submitter.calls(), 1);
        assert_eq!(view.count_phase(FormPhase::Failed), 1);
        assert_eq!(view.submit_enabled, vec![false, true]);
        assert_eq!(view.banners, vec![Banner::quote_failure()]);
        assert_eq!(controller.phase(), FormPhase::Idle);
    }
}
