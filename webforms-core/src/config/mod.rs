//! Site configuration loaded from TOML.
//!
//! Every section is optional; an empty file yields the production defaults
//! (the two Apps Script endpoints, 10 s / 15 s banner delays and a base
//! price of ₹10,000 with no priced options).

mod pricing;

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::models::FormKind;

pub use pricing::{
    CategoryOptions, CategoryTable, DEFAULT_BASE_PRICE, PricedOption, PricingConfig,
};

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbyS-Be4r6bRkt6xbzv_7iJvVDdQSQvMyJBTojr8Pl6GqpN5bNMmSQPsR7aikWu1dO4qZg/exec";
pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwnyVGEApUL-yyAXgVEF6DKXR_2nFYpRaJXK-lL76Vkafw51TnuPBoDpaYG3GpxRl6w/exec";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {form} endpoint '{url}': {reason}")]
    InvalidEndpoint {
        form: FormKind,
        url: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub endpoints: EndpointConfig,
    pub display: DisplayConfig,
    pub pricing: PricingConfig,
}

impl SiteConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading site config");
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Checks that both endpoints are absolute http(s) URLs.
    ///
    /// Cost annotations are deliberately not checked here: a malformed cost
    /// prices as zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for form in [FormKind::Contact, FormKind::Quote] {
            check_endpoint(form, self.endpoints.for_form(form))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub contact: String,
    pub quote: String,
}

impl EndpointConfig {
    pub fn for_form(
        &self,
        form: FormKind,
    ) -> &str {
        match form {
            FormKind::Contact => &self.contact,
            FormKind::Quote => &self.quote,
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            contact: DEFAULT_CONTACT_ENDPOINT.to_string(),
            quote: DEFAULT_QUOTE_ENDPOINT.to_string(),
        }
    }
}

/// How long success banners stay up before the view hides them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub contact_banner_secs: u64,
    pub quote_banner_secs: u64,
}

impl DisplayConfig {
    pub fn success_banner_delay(
        &self,
        form: FormKind,
    ) -> Duration {
        match form {
            FormKind::Contact => Duration::from_secs(self.contact_banner_secs),
            FormKind::Quote => Duration::from_secs(self.quote_banner_secs),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            contact_banner_secs: 10,
            quote_banner_secs: 15,
        }
    }
}

fn check_endpoint(
    form: FormKind,
    raw: &str,
) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        form,
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
