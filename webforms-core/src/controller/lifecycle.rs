use serde::Serialize;
use tracing::{debug, info};

use super::{FormPhase, FormView};
use crate::{
    models::FormKind,
    submit::{SubmissionError, Submitter},
};

/// Phase tracking and the in-flight flag shared by both controllers.
#[derive(Debug, Clone)]
pub(crate) struct Lifecycle {
    form: FormKind,
    phase: FormPhase,
    submitting: bool,
}

impl Lifecycle {
    pub(crate) fn new(form: FormKind) -> Self {
        Self {
            form,
            phase: FormPhase::Idle,
            submitting: false,
        }
    }

    pub(crate) fn phase(&self) -> FormPhase {
        self.phase
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn enter(
        &mut self,
        phase: FormPhase,
        view: &mut dyn FormView,
    ) {
        debug!(form = %self.form, from = ?self.phase, to = ?phase, "form phase change");
        self.phase = phase;
        view.phase_changed(phase);
    }

    /// Enters `phase` and then settles back to idle.
    pub(crate) fn finish(
        &mut self,
        phase: FormPhase,
        view: &mut dyn FormView,
    ) {
        self.enter(phase, view);
        self.enter(FormPhase::Idle, view);
    }

    pub(crate) fn begin_submit(
        &mut self,
        view: &mut dyn FormView,
    ) {
        self.submitting = true;
        view.set_submit_enabled(false);
        self.enter(FormPhase::Submitting, view);
    }

    pub(crate) fn end_submit(
        &mut self,
        view: &mut dyn FormView,
    ) {
        self.submitting = false;
        view.set_submit_enabled(true);
    }
}

/// Encodes `payload` and hands it to the submitter.
pub(crate) async fn deliver<P: Serialize>(
    submitter: &dyn Submitter,
    form: FormKind,
    endpoint: &str,
    payload: &P,
) -> Result<(), SubmissionError> {
    let body = serde_json::to_value(payload)?;
    info!(%form, endpoint, "submitting form");
    submitter.submit(endpoint, &body).await?;
    info!(%form, "form submitted");
    Ok(())
}
