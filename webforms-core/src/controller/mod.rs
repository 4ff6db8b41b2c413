//! Form controllers and the event plumbing around them.
//!
//! Each controller owns its form's state exclusively and walks the same
//! lifecycle:
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle
//!                    -> Submitting -> Succeeded -> Idle
//!                                  -> Failed    -> Idle
//! ```
//!
//! Every transition is reported through [`FormView::phase_changed`].

mod contact;
mod events;
mod lifecycle;
mod quote;
mod router;

use async_trait::async_trait;

pub use contact::ContactFormController;
pub use events::{FormEvent, InputChange};
pub use quote::QuoteFormController;
pub use router::{FormRouter, RouterError};

use crate::{
    models::FormKind,
    render::Banner,
    validation::{FieldError, FormValidation},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormPhase {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request went out; the endpoint's verdict is unknown.
    Sent,
    /// Validation failed; nothing was sent.
    Invalid(Vec<FieldError>),
    /// The request could not be delivered.
    Failed(String),
    /// A submission is already in flight.
    Busy,
}

/// The presentation collaborator a front end implements.
pub trait FormView {
    fn show_field_error(
        &mut self,
        field: &str,
        message: &str,
    );

    fn clear_field_error(
        &mut self,
        field: &str,
    );

    /// Hides the banner and every inline field error.
    fn clear_messages(&mut self);

    fn show_banner(
        &mut self,
        banner: &Banner,
    );

    fn set_submit_enabled(
        &mut self,
        enabled: bool,
    );

    /// Shows the headline amount and the breakdown markup.
    fn show_quote(
        &mut self,
        _amount: &str,
        _breakdown_html: &str,
    ) {
    }

    /// Clears every input back to its initial value.
    fn reset_fields(&mut self) {}

    fn phase_changed(
        &mut self,
        _phase: FormPhase,
    ) {
    }
}

/// A form that reacts to [`FormEvent`]s.
#[async_trait(?Send)]
pub trait FormController {
    fn form(&self) -> FormKind;

    fn phase(&self) -> FormPhase;

    fn handle_input(
        &mut self,
        change: &InputChange,
        view: &mut dyn FormView,
    );

    fn handle_blur(
        &mut self,
        field: &str,
        view: &mut dyn FormView,
    );

    /// Validates and, when valid, submits.
    ///
    /// Suspends until the network call settles. The returned future must be
    /// driven to completion; an abandoned submission leaves the form busy.
    async fn handle_submit(
        &mut self,
        view: &mut dyn FormView,
    ) -> SubmitOutcome;
}

/// Shows or clears each validated field's inline error.
fn reflect_validation(
    validation: &FormValidation,
    view: &mut dyn FormView,
) {
    for field in validation.passed() {
        view.clear_field_error(field);
    }
    for error in validation.errors() {
        view.show_field_error(error.field, error.message());
    }
}
