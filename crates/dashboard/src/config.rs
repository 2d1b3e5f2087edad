//! Dashboard configuration (environment-driven).

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use stockroom_core::IdStrategy;

pub const ENV_LOADING_MS: &str = "STOCKROOM_LOADING_MS";
pub const ENV_PAGE_SIZE: &str = "STOCKROOM_PAGE_SIZE";
pub const ENV_ID_STRATEGY: &str = "STOCKROOM_ID_STRATEGY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// How long the loading flag stays up after an inventory mutation.
    pub loading_duration: Duration,
    /// Rows per page of the item grid (>= 1).
    pub page_size: usize,
    /// Id allocation for both stores.
    pub id_strategy: IdStrategy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            loading_duration: Duration::from_millis(1000),
            page_size: 5,
            id_strategy: IdStrategy::Monotonic,
        }
    }
}

impl DashboardConfig {
    /// Read overrides from the process environment; unset keys keep defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ENV_LOADING_MS) {
            let ms = raw.trim().parse::<u64>().map_err(|e| invalid(ENV_LOADING_MS, &raw, e))?;
            cfg.loading_duration = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            let size = raw.trim().parse::<usize>().map_err(|e| invalid(ENV_PAGE_SIZE, &raw, e))?;
            if size == 0 {
                return Err(invalid(ENV_PAGE_SIZE, &raw, "must be at least 1"));
            }
            cfg.page_size = size;
        }

        if let Some(raw) = lookup(ENV_ID_STRATEGY) {
            cfg.id_strategy = raw.parse::<IdStrategy>().map_err(|e| invalid(ENV_ID_STRATEGY, &raw, e))?;
        }

        debug!(?cfg, "dashboard config loaded");
        Ok(cfg)
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
