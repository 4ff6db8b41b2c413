use serde::{Deserialize, Serialize};

use super::QuoteComponent;

/// The five single-choice pricing selectors on the quote form.
///
/// Each selector contributes the cost of its selected option to exactly one
/// [`QuoteComponent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Timeline,
    DomainStatus,
    Emails,
    LogoStatus,
    Media,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Timeline,
        Category::DomainStatus,
        Category::Emails,
        Category::LogoStatus,
        Category::Media,
    ];

    /// Field id of the selector; also its key in the quote payload.
    pub fn field_id(&self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::DomainStatus => "domainStatus",
            Self::Emails => "emails",
            Self::LogoStatus => "logoStatus",
            Self::Media => "media",
        }
    }

    pub fn parse(field_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.field_id() == field_id)
    }

    /// The quote component this selector's cost lands in.
    pub fn component(&self) -> QuoteComponent {
        match self {
            Self::Timeline => QuoteComponent::Timeline,
            Self::DomainStatus => QuoteComponent::Domain,
            Self::Emails => QuoteComponent::Emails,
            Self::LogoStatus => QuoteComponent::Logo,
            Self::Media => QuoteComponent::Media,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_field_id() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.field_id()), Some(category));
        }
    }

    #[test]
    fn parse_rejects_non_category_fields() {
        assert_eq!(Category::parse("budget"), None);
        assert_eq!(Category::parse("Timeline"), None);
    }

    #[test]
    fn domain_status_feeds_domain_component() {
        assert_eq!(Category::DomainStatus.component(), QuoteComponent::Domain);
        assert_eq!(Category::LogoStatus.component(), QuoteComponent::Logo);
    }
}
