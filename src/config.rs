use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fixed feed location used when no config file overrides it.
pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Feed URL queried on each fetch
    pub feed_url: String,
    /// Prefer high-resolution sources for gallery thumbnails
    #[serde(default)]
    pub hd_thumbnails: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            hd_thumbnails: false,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".apod-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Load the config, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default() -> Config {
        Config::load().unwrap_or_default()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_fixed_feed() {
        let config = Config::default();
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert!(!config.hd_thumbnails);
    }

    #[test]
    fn missing_hd_flag_defaults_off() {
        let config: Config =
            serde_json::from_str(r#"{"feed_url": "https://example.com/feed.json"}"#)
                .expect("config should parse without the hd flag");
        assert!(!config.hd_thumbnails);
    }
}
