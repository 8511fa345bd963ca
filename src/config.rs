//! Runtime settings for importing sheets.
//!
//! Values come from environment variables (a `.env` file is loaded by the
//! binary first) or from a JSON file:
//!
//! ```json
//! {
//!   "export_base_url": "https://docs.google.com/spreadsheets/d",
//!   "timeout_secs": 30,
//!   "connect_timeout_secs": 10,
//!   "log_file_path": "logs/growth_radar.log"
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::source::DEFAULT_EXPORT_BASE;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub export_base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub log_file_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_base_url: DEFAULT_EXPORT_BASE.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            log_file_path: "logs/growth_radar.log".to_string(),
        }
    }
}

impl Settings {
    /// Reads `SHEETS_EXPORT_BASE`, `FETCH_TIMEOUT_SECS`,
    /// `FETCH_CONNECT_TIMEOUT_SECS` and `LOG_FILE_PATH`, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings from a JSON file at `path`. Missing keys take defaults.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{path}'"))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("invalid settings file '{path}'"))?;
        Ok(settings)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(base) = lookup("SHEETS_EXPORT_BASE") {
            settings.export_base_url = base;
        }
        if let Some(secs) = lookup("FETCH_TIMEOUT_SECS") {
            settings.timeout_secs = secs
                .parse()
                .with_context(|| format!("FETCH_TIMEOUT_SECS is not a number: '{secs}'"))?;
        }
        if let Some(secs) = lookup("FETCH_CONNECT_TIMEOUT_SECS") {
            settings.connect_timeout_secs = secs.parse().with_context(|| {
                format!("FETCH_CONNECT_TIMEOUT_SECS is not a number: '{secs}'")
            })?;
        }
        if let Some(path) = lookup("LOG_FILE_PATH") {
            settings.log_file_path = path;
        }

        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
