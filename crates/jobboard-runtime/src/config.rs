use crate::{Error, Result};
use jobboard_engine::{FEED_PAGE_SIZE, FeedConfig, LIST_PAGE_SIZE, SCROLL_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SOURCE: &str = "job_data.json";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. JOBBOARD_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.jobboard (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("JOBBOARD_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("jobboard"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".jobboard"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL or path of the published job data
    pub source: String,
    pub feed_page_size: usize,
    pub list_page_size: usize,
    pub load_more_delay_ms: u64,
    pub scroll_threshold: f64,
    /// Fetch timeout; the HTTP client default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            feed_page_size: FEED_PAGE_SIZE,
            list_page_size: LIST_PAGE_SIZE,
            load_more_delay_ms: 500,
            scroll_threshold: SCROLL_THRESHOLD,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Apply `JOBBOARD_SOURCE` and `JOBBOARD_LOAD_MORE_DELAY_MS`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub(crate) fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        if let Some(source) = lookup("JOBBOARD_SOURCE") {
            self.source = source;
        }
        if let Some(delay) = lookup("JOBBOARD_LOAD_MORE_DELAY_MS") {
            self.load_more_delay_ms = delay.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "JOBBOARD_LOAD_MORE_DELAY_MS must be a whole number of milliseconds, got '{}'",
                    delay
                ))
            })?;
        }
        Ok(())
    }

    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            page_size: self.feed_page_size,
            load_more_delay: Duration::from_millis(self.load_more_delay_ms),
            scroll_threshold: self.scroll_threshold,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
