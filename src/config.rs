use anyhow::{Context, Result};
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment};
use serde::Deserialize;

pub const DEFAULT_URI: &str =
    "https://safer.fmcsa.dot.gov/query.asp?searchtype=ANY&query_type=queryCarrierSnapshot";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings, read from `SAFER_*` environment variables on top of defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Snapshot endpoint; must already carry a query string.
    pub uri: String,
    pub timeout_secs: u64,
    pub default_phone_number: String,
    pub default_phone_country_code: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_builder(Config::builder().add_source(Environment::with_prefix("SAFER")))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .set_default("uri", DEFAULT_URI)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("default_phone_number", "n/a")?
            .set_default("default_phone_country_code", "n/a")?
            .build()
            .context("Failed to build SAFER settings")?
            .try_deserialize()
            .context("Invalid SAFER settings")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            uri: DEFAULT_URI.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_phone_number: "n/a".to_string(),
            default_phone_country_code: "n/a".to_string(),
        }
    }
}
