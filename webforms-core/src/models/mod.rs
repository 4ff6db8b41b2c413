pub(crate) mod amount;
mod category;
mod contact;
mod field;
mod form_kind;
mod quote;
mod quote_request;
mod selection;

pub use category::Category;
pub use contact::{ContactField, ContactForm, ContactSubmission};
pub use field::{FieldKind, FieldSpec, FieldState};
pub use form_kind::FormKind;
pub use quote::{Quote, QuoteComponent};
pub use quote_request::{QuoteField, QuoteForm, QuoteSubmission};
pub use selection::Selections;
