//! Runtime configuration read from environment variables.

use crate::error::ConfigError;
use std::{env, path::PathBuf, str::FromStr, time::Duration};
use tracing::info;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8000;
/// Default artificial latency before an add-to-cart takes effect
pub const DEFAULT_ADD_TO_CART_DELAY_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port the adapter listens on (`PORT`)
    pub port: u16,

    /// Simulated network delay for add-to-cart (`ADD_TO_CART_DELAY_MS`)
    pub add_to_cart_delay: Duration,

    /// Optional JSON product dataset (`CATALOG_PATH`); the embedded sample
    /// catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            add_to_cart_delay: Duration::from_millis(DEFAULT_ADD_TO_CART_DELAY_MS),
            catalog_path: None,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let delay_ms = parse_or(
            &lookup,
            "ADD_TO_CART_DELAY_MS",
            DEFAULT_ADD_TO_CART_DELAY_MS,
        )?;
        let catalog_path = lookup("CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            port,
            add_to_cart_delay: Duration::from_millis(delay_ms),
            catalog_path,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
