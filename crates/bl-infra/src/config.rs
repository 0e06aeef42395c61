//! Application configuration: defaults plus `BIMALINK_*` environment
//! overrides (e.g. `BIMALINK_GEMINI__API_KEY`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted comparison selection.
    pub data_dir: PathBuf,

    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub endpoint: String,
    pub model: String,

    /// Absent key is not an error: advice simply degrades to the fallback.
    #[serde(default)]
    pub api_key: Option<String>,

    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let default_data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bimalink");

        let cfg = config::Config::builder()
            .set_default("data_dir", default_data_dir.to_string_lossy().to_string())?
            .set_default("gemini.endpoint", "https://generativelanguage.googleapis.com")?
            .set_default("gemini.model", "gemini-3-flash-preview")?
            .set_default("gemini.timeout_secs", 10)?
            .add_source(config::Environment::with_prefix("BIMALINK").separator("__"))
            .build()
            .context("assemble configuration")?;

        cfg.try_deserialize().context("deserialize configuration")
    }
}
