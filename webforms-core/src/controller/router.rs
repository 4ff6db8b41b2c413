use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use super::{FormController, FormEvent, FormView, SubmitOutcome};
use crate::models::FormKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("no controller registered for the {0} form")]
    UnknownForm(FormKind),
}

/// Routes events to the controller registered for each form on the page.
///
/// A page may carry either form, both, or neither; events for a form that
/// is absent are rejected rather than dropped silently.
#[derive(Default)]
pub struct FormRouter {
    controllers: HashMap<FormKind, Box<dyn FormController>>,
}

impl FormRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `controller` for its form, replacing any previous one.
    pub fn register(
        &mut self,
        controller: Box<dyn FormController>,
    ) {
        let form = controller.form();
        if self.controllers.insert(form, controller).is_some() {
            warn!(%form, "replacing registered form controller");
        } else {
            debug!(%form, "registered form controller");
        }
    }

    pub fn registered_forms(&self) -> Vec<FormKind> {
        let mut forms: Vec<_> = self.controllers.keys().copied().collect();
        forms.sort();
        forms
    }

    pub fn controller(
        &self,
        form: FormKind,
    ) -> Option<&dyn FormController> {
        self.controllers.get(&form).map(|c| c.as_ref())
    }

    /// Hands `event` to the form's controller. Only submit events produce an
    /// outcome.
    pub async fn dispatch(
        &mut self,
        form: FormKind,
        event: FormEvent,
        view: &mut dyn FormView,
    ) -> Result<Option<SubmitOutcome>, RouterError> {
        let controller = self
            .controllers
            .get_mut(&form)
            .ok_or(RouterError::UnknownForm(form))?;

        let outcome = match event {
            FormEvent::Input(change) => {
                controller.handle_input(&change, view);
                None
            }
            FormEvent::Blur(field) => {
                controller.handle_blur(&field, view);
                None
            }
            FormEvent::Submit => Some(controller.handle_submit(view).await),
        };
        Ok(outcome)
    }
}
