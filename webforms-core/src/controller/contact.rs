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
    models::{ContactField, ContactForm, FormKind},
    render::Banner,
    submit::{Clock, Submitter, SystemClock},
    validation::{self, FormValidation, validate_all},
};

/// Drives the contact form: stores input, validates on blur and before
/// submit, and sends the message.
pub struct ContactFormController {
    fields: ContactForm,
    submitter: Arc<dyn Submitter>,
    clock: Arc<dyn Clock>,
    endpoint: String,
    banner_delay: Duration,
    lifecycle: Lifecycle,
}

impl ContactFormController {
    pub fn new(
        config: &SiteConfig,
        submitter: Arc<dyn Submitter>,
    ) -> Self {
        Self {
            fields: ContactForm::new(),
            submitter,
            clock: Arc::new(SystemClock),
            endpoint: config.endpoints.contact.clone(),
            banner_delay: config.display.success_banner_delay(FormKind::Contact),
            lifecycle: Lifecycle::new(FormKind::Contact),
        }
    }

    pub fn with_clock(
        mut self,
        clock: Arc<dyn Clock>,
    ) -> Self {
        self.clock = clock;
        self
    }

    pub fn fields(&self) -> &ContactForm {
        &self.fields
    }

    /// Validates one field, records the result and shows or clears its
    /// inline error. Returns whether the field is valid.
    pub fn validate_field(
        &mut self,
        field: ContactField,
        view: &mut dyn FormView,
    ) -> bool {
        let result = validation::validate_field(&field.spec(), self.fields.value(field));
        let state = self.fields.state_mut(field);
        match result {
            Ok(()) => {
                state.mark_valid();
                view.clear_field_error(field.id());
                true
            }
            Err(e) => {
                state.mark_invalid(e.message());
                view.show_field_error(field.id(), e.message());
                false
            }
        }
    }

    /// Validates every checked field, surfacing all errors at once.
    pub fn validate_form(
        &mut self,
        view: &mut dyn FormView,
    ) -> FormValidation {
        let validation = validate_all(
            ContactField::VALIDATED.map(|field| (field.spec(), self.fields.value(field))),
        );

        for field in ContactField::VALIDATED {
            let state = self.fields.state_mut(field);
            match validation.error_for(field.id()) {
                Some(e) => state.mark_invalid(e.message()),
                None => state.mark_valid(),
            }
        }
        reflect_validation(&validation, view);

        validation
    }

    pub async fn submit(
        &mut self,
        view: &mut dyn FormView,
    ) -> SubmitOutcome {
        if self.lifecycle.is_submitting() {
            debug!("contact submission already in flight");
            return SubmitOutcome::Busy;
        }

        view.clear_messages();
        self.lifecycle.enter(FormPhase::Validating, view);

        let validation = self.validate_form(view);
        if !validation.is_valid() {
            self.lifecycle.finish(FormPhase::Invalid, view);
            return SubmitOutcome::Invalid(validation.errors().to_vec());
        }

        let payload = self.fields.submission(self.clock.timestamp());

        self.lifecycle.begin_submit(view);
        let result = deliver(
            self.submitter.as_ref(),
            FormKind::Contact,
            &self.endpoint,
            &payload,
        )
        .await;

        let outcome = match result {
            Ok(()) => {
                view.show_banner(&Banner::contact_success(self.banner_delay));
                self.fields.reset();
                view.reset_fields();
                self.lifecycle.finish(FormPhase::Succeeded, view);
                SubmitOutcome::Sent
            }
            Err(e) => {
                error!(error = %e, "error submitting contact form");
                view.show_banner(&Banner::contact_failure());
                self.lifecycle.finish(FormPhase::Failed, view);
                SubmitOutcome::Failed(e.to_string())
            }
        };
        self.lifecycle.end_submit(view);

        outcome
    }
}

#[async_trait(?Send)]
impl FormController for ContactFormController {
    fn form(&self) -> FormKind {
        FormKind::Contact
    }

    fn phase(&self) -> FormPhase {
        self.lifecycle.phase()
    }

    fn handle_input(
        &mut self,
        change: &InputChange,
        _view: &mut dyn FormView,
    ) {
        match change {
            InputChange::Text { field, value } => match ContactField::parse(field) {
                Some(ContactField::Newsletter) | None => {
                    debug!(field = %field, "ignoring text input for unknown contact field")
                }
                Some(field) => self.fields.set(field, value.clone()),
            },
            InputChange::Toggle {
                field,
                option,
                checked,
            } if field == ContactField::Newsletter.id() => {
                self.fields.set_newsletter(option, *checked);
            }
            InputChange::Toggle { field, .. } => {
                debug!(field = %field, "ignoring toggle for unknown contact field")
            }
        }
    }

    fn handle_blur(
        &mut self,
        field: &str,
        view: &mut dyn FormView,
    ) {
        if let Some(field) = ContactField::parse(field) {
            self.validate_field(field, view);
        }
    }

    async fn handle_submit(
        &mut self,
        view: &mut dyn FormView,
    ) -> SubmitOutcome {
        self.submit(view).await
    }
}
