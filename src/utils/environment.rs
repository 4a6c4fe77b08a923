use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::debounce::{DEFAULT_SUGGESTION_LIMIT, FILTER_DEBOUNCE, SUGGEST_DEBOUNCE, SessionConfig};

pub const DEFAULT_API_BASE: &str = "http://localhost:5147/api";
/// Relative base used behind the development proxy
pub const DEFAULT_ANALYZE_BASE: &str = "/api";
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

pub const GLOSSARY_FILE: &str = "glossary.json";
pub const TRANSLATIONS_FILE: &str = "translations.json";
pub const PAGES_FILE: &str = "pages.json";

/// Runtime settings, read from `DIGIGUARD_*` environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub api_base: String,
    pub analyze_base: String,
    pub suggestion_limit: usize,
    pub suggest_debounce: Duration,
    pub filter_debounce: Duration,
    pub health_timeout: Duration,
}

impl Settings {
    /// Read settings from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse, or if no data
    /// directory is configured and the platform has none.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = match non_empty(lookup("DIGIGUARD_DATA_DIR")) {
            Some(dir) => PathBuf::from(dir),
            None => get_data_dir()?,
        };

        Ok(Self {
            data_dir,
            api_base: non_empty(lookup("DIGIGUARD_API_BASE"))
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            analyze_base: non_empty(lookup("DIGIGUARD_ANALYZE_BASE"))
                .unwrap_or_else(|| DEFAULT_ANALYZE_BASE.to_string()),
            suggestion_limit: parse_var(&lookup, "DIGIGUARD_SUGGESTION_LIMIT")?
                .unwrap_or(DEFAULT_SUGGESTION_LIMIT),
            suggest_debounce: parse_millis(&lookup, "DIGIGUARD_SUGGEST_DEBOUNCE_MS")?
                .unwrap_or(SUGGEST_DEBOUNCE),
            filter_debounce: parse_millis(&lookup, "DIGIGUARD_FILTER_DEBOUNCE_MS")?
                .unwrap_or(FILTER_DEBOUNCE),
            health_timeout: parse_millis(&lookup, "DIGIGUARD_HEALTH_TIMEOUT_MS")?
                .unwrap_or(DEFAULT_HEALTH_TIMEOUT),
        })
    }

    pub fn glossary_path(&self) -> PathBuf {
        self.data_dir.join(GLOSSARY_FILE)
    }

    pub fn translations_path(&self) -> PathBuf {
        self.data_dir.join(TRANSLATIONS_FILE)
    }

    pub fn pages_path(&self) -> PathBuf {
        self.data_dir.join(PAGES_FILE)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            suggest_window: self.suggest_debounce,
            filter_window: self.filter_debounce,
            suggestion_limit: self.suggestion_limit,
            ..SessionConfig::default()
        }
    }
}

/// Get the platform data directory for DigiGuard (e.g. ~/.local/share/digiguard)
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("No data directory available; set DIGIGUARD_DATA_DIR")?;
    Ok(base.join("digiguard"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    non_empty(lookup(key))
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Invalid value for {key}: {raw:?}"))
        })
        .transpose()
}

fn parse_millis(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    Ok(parse_var::<u64>(lookup, key)?.map(Duration::from_millis))
}
