//! Command-line front end for the web form controllers.
//!
//! Answers files stand in for a visitor: each answer is replayed as the
//! input event a browser would have produced, and a [`ConsoleView`] prints
//! whatever the controller asks the page to show.

mod answers;
mod dry_run;
mod replay;
mod view;

pub use answers::Answers;
pub use dry_run::DryRunSubmitter;
pub use replay::{config_summary, replay};
pub use view::{ConsoleView, markup_to_text};
