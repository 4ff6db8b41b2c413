use std::time::Duration;

use super::{RUPEE, format_inr};
use crate::models::Quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Form-level message shown above or below a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub body: String,
    /// `body` is markup rather than plain text.
    pub is_html: bool,
    /// The view hides the banner after this long; `None` keeps it up.
    pub auto_hide: Option<Duration>,
}

impl Banner {
    pub fn contact_success(auto_hide: Duration) -> Self {
        Self {
            kind: BannerKind::Success,
            body: "✓ Thank you! Your message has been sent successfully. We'll get back to you within 24 hours."
                .to_string(),
            is_html: false,
            auto_hide: Some(auto_hide),
        }
    }

    pub fn contact_failure() -> Self {
        Self::error("Failed to send message. Please try again or email us directly.")
    }

    pub fn quote_success(
        quote: &Quote,
        auto_hide: Duration,
    ) -> Self {
        Self {
            kind: BannerKind::Success,
            body: format!(
                "<strong>✓ Quote Request Received!</strong><br>Your estimated quote is {RUPEE}{}. \
                 We'll send you a detailed proposal within 24 hours and contact you to discuss your project.",
                format_inr(quote.total())
            ),
            is_html: true,
            auto_hide: Some(auto_hide),
        }
    }

    pub fn quote_failure() -> Self {
        Self::error("Failed to submit quote request. Please try again or contact us directly.")
    }

    fn error(message: &str) -> Self {
        Self {
            kind: BannerKind::Error,
            body: format!("✗ {message}"),
            is_html: false,
            auto_hide: None,
        }
    }
}
