use std::path::PathBuf;
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};

const LOG_LEVEL_VAR: &str = "MARQUEE_LOG_LEVEL";
const DEFAULT_PAGE_SIZE_VAR: &str = "MARQUEE_DEFAULT_PAGE_SIZE";
const MAX_PAGE_SIZE_VAR: &str = "MARQUEE_MAX_PAGE_SIZE";
const SEED_FILE_VAR: &str = "MARQUEE_SEED_FILE";

/// Runtime configuration, read from the environment (and `.env` when present)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: log::LevelFilter,
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: log::LevelFilter::Info,
            default_page_size: 10,
            max_page_size: 100,
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(raw) => log::LevelFilter::from_str(raw.trim()).map_err(|_| {
                AppError::ConfigError(format!("{} has unknown level '{}'", LOG_LEVEL_VAR, raw))
            })?,
            None => defaults.log_level,
        };

        let default_page_size =
            parse_positive(&lookup, DEFAULT_PAGE_SIZE_VAR)?.unwrap_or(defaults.default_page_size);
        let max_page_size =
            parse_positive(&lookup, MAX_PAGE_SIZE_VAR)?.unwrap_or(defaults.max_page_size);

        if default_page_size > max_page_size {
            return Err(AppError::ConfigError(format!(
                "{} ({}) exceeds {} ({})",
                DEFAULT_PAGE_SIZE_VAR, default_page_size, MAX_PAGE_SIZE_VAR, max_page_size
            )));
        }

        let seed_file = lookup(SEED_FILE_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            log_level,
            default_page_size,
            max_page_size,
            seed_file,
        })
    }
}

fn parse_positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> AppResult<Option<u32>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|e| AppError::ConfigError(format!("{} must be a number: {}", key, e)))?;
    if value == 0 {
        return Err(AppError::ConfigError(format!("{} must be positive", key)));
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("MARQUEE_LOG_LEVEL", "debug"),
            ("MARQUEE_DEFAULT_PAGE_SIZE", "20"),
            ("MARQUEE_MAX_PAGE_SIZE", "50"),
            ("MARQUEE_SEED_FILE", "catalog.json"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, log::LevelFilter::Debug);
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.max_page_size, 50);
        assert_eq!(config.seed_file, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("MARQUEE_LOG_LEVEL", "loud")])),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("MARQUEE_MAX_PAGE_SIZE", "0")])),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("MARQUEE_DEFAULT_PAGE_SIZE", "500")])),
            Err(AppError::ConfigError(_))
        ));
    }
}
