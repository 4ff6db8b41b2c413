//! Form controllers for the business website: the contact form and the
//! quote-request calculator.
//!
//! The crate is toolkit agnostic. A front end feeds [`controller::InputChange`]
//! events into a [`controller::FormController`] and implements
//! [`controller::FormView`] to reflect errors, banners and the running quote.
//! Submissions go through the [`submit::Submitter`] seam.

pub mod config;
pub mod controller;
pub mod models;
pub mod pricing;
pub mod render;
pub mod submit;
pub mod validation;

pub use config::{ConfigError, SiteConfig};
pub use controller::{
    ContactFormController, FormController, FormEvent, FormPhase, FormRouter, FormView,
    InputChange, QuoteFormController, RouterError, SubmitOutcome,
};
pub use models::*;
pub use pricing::PricingEngine;
pub use submit::{Clock, SubmissionError, Submitter, SystemClock};
