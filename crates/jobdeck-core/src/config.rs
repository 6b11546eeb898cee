//! Configuration types for jobdeck.
//!
//! [`Config::load`] reads `~/.config/jobdeck/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[api]
base_url      = "https://backend-py-fu8j.onrender.com/api"
fallback_urls = []
timeout_secs  = 20
user_agent    = "jobdeck/0.1"
per_page      = 20

[output]
show_tags   = true
show_url    = true
date_format = "%Y-%m-%d"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/jobdeck/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[api]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Extra base URLs tried in order when the primary one fails.
    #[serde(default)]
    pub fallback_urls: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_base_url() -> String { "https://backend-py-fu8j.onrender.com/api".to_string() }
fn default_timeout_secs() -> u64 { 20 }
fn default_user_agent() -> String { "jobdeck/0.1".to_string() }
fn default_per_page() -> u32 { 20 }

impl ApiConfig {
    /// All base URLs in try-order: the primary first, then the fallbacks,
    /// each with any trailing slash stripped. Empty entries are skipped.
    pub fn base_urls(&self) -> Vec<String> {
        std::iter::once(&self.base_url)
            .chain(self.fallback_urls.iter())
            .map(|u| u.trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fallback_urls: Vec::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            per_page: default_per_page(),
        }
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_show_tags")]
    pub show_tags: bool,
    #[serde(default = "default_show_url")]
    pub show_url: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_show_tags() -> bool { true }
fn default_show_url() -> bool { true }
fn default_date_format() -> String { "%Y-%m-%d".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_tags: default_show_tags(),
            show_url: default_show_url(),
            date_format: default_date_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/jobdeck/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("jobdeck")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
