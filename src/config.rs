use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub feed: FeedConfig,
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub ws_url: String,
    pub instrument: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Seconds between simulation passes. Values below 1 are coerced
    /// up to 1, never rejected.
    pub interval_secs: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl SimulationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1) as u64)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let path = std::env::var("TICKLIVE_CONFIG")
            .unwrap_or_else(|_| "config/default.toml".to_string());
        Self::load_from_path(Path::new(&path))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config: Config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        // The instrument may be overridden per run without editing the
        // config file.
        if let Ok(instrument) = std::env::var("TICKLIVE_INSTRUMENT") {
            config.feed.instrument = instrument;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.feed.ws_url)
            .with_context(|| format!("feed.ws_url '{}' is not a valid URL", self.feed.ws_url))?;
        if parsed.scheme() != "ws" && parsed.scheme() != "wss" {
            anyhow::bail!("feed.ws_url must use the ws or wss scheme");
        }
        Ok(())
    }
}
