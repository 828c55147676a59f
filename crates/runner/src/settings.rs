//! Environment-sourced settings
//!
//! No CLI flags and no config files: credentials and strategy parameters
//! come from environment variables, with defaults for everything except
//! the credentials themselves.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dipwatch_core::SpotPair;

pub const ENV_API_KEY: &str = "DIPWATCH_API_KEY";
pub const ENV_API_SECRET: &str = "DIPWATCH_API_SECRET";
pub const ENV_BASE_URL: &str = "DIPWATCH_BASE_URL";
pub const ENV_BASE_ASSET: &str = "DIPWATCH_BASE_ASSET";
pub const ENV_QUOTE_ASSET: &str = "DIPWATCH_QUOTE_ASSET";
pub const ENV_THRESHOLD: &str = "DIPWATCH_THRESHOLD";
pub const ENV_QUANTITY: &str = "DIPWATCH_QUANTITY";
pub const ENV_AUDIT_FILE: &str = "DIPWATCH_AUDIT_FILE";

const DEFAULT_BASE_URL: &str = "https://api.restex.example";

/// Resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
    pub pair: SpotPair,
    pub threshold: Decimal,
    pub buy_quantity: Decimal,
    /// Optional JSONL audit sink path; log-facade sink when unset
    pub audit_file: Option<String>,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Read settings through a lookup function (testable seam)
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let base = var(ENV_BASE_ASSET).unwrap_or_else(|| "BTC".to_string());
        let quote = var(ENV_QUOTE_ASSET).unwrap_or_else(|| "USDT".to_string());

        let threshold = match var(ENV_THRESHOLD) {
            Some(raw) => raw
                .parse::<Decimal>()
                .map_err(|e| format!("{} is not a decimal: {}", ENV_THRESHOLD, e))?,
            None => dec!(90000),
        };
        let buy_quantity = match var(ENV_QUANTITY) {
            Some(raw) => raw
                .parse::<Decimal>()
                .map_err(|e| format!("{} is not a decimal: {}", ENV_QUANTITY, e))?,
            None => dec!(0.001),
        };

        Ok(Self {
            api_key: var(ENV_API_KEY).unwrap_or_default(),
            api_secret: var(ENV_API_SECRET).unwrap_or_default(),
            base_url: var(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            pair: SpotPair::new(base, quote),
            threshold,
            buy_quantity,
            audit_file: var(ENV_AUDIT_FILE),
        })
    }

    /// Both credential strings present and non-blank
    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.api_secret.trim().is_empty()
    }
}
