use std::fmt::Write;

use webforms_core::{
    Category, FormEvent, FormKind, FormRouter, FormView, RouterError, SiteConfig,
    SubmitOutcome, config::PricedOption,
};

use crate::Answers;

/// Replays `answers` into the controller registered for `form`, then submits
/// when `submit` is set.
pub async fn replay(
    router: &mut FormRouter,
    form: FormKind,
    answers: &Answers,
    submit: bool,
    view: &mut dyn FormView,
) -> Result<Option<SubmitOutcome>, RouterError> {
    for event in answers.events(form) {
        router.dispatch(form, event, view).await?;
    }

    if !submit {
        return Ok(None);
    }
    router.dispatch(form, FormEvent::Submit, view).await
}

/// Human-readable overview of a loaded config.
pub fn config_summary(config: &SiteConfig) -> String {
    let mut out = String::new();
    let pricing = &config.pricing;

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Endpoints:");
    for form in [FormKind::Contact, FormKind::Quote] {
        let _ = writeln!(out, "  {form}: {}", config.endpoints.for_form(form));
    }
    let _ = writeln!(
        out,
        "Banners: contact {}s, quote {}s",
        config.display.contact_banner_secs, config.display.quote_banner_secs
    );
    let _ = writeln!(out, "Base price: {}", pricing.base_price);
    let _ = writeln!(out, "Actions: {}", option_list(&pricing.actions));
    for category in Category::ALL {
        let options = &pricing.categories.get(category).options;
        let _ = writeln!(out, "  {}: {}", category.field_id(), option_list(options));
    }

    out
}

fn option_list(options: &[PricedOption]) -> String {
    if options.is_empty() {
        return "(none)".to_string();
    }
    options
        .iter()
        .map(|o| match &o.cost {
            Some(cost) => format!("{} ({cost})", o.value),
            None => o.value.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
