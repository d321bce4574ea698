//! Configuration management for the site search aggregator.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//!
//! # Example
//!
//! ```toml
//! [search]
//! max_query_length = 500
//! isolate_failures = true
//!
//! [content]
//! posts_file = "/srv/site/posts.json"
//!
//! [modules]
//! installed = ["RainLab.Blog"]
//!
//! [routing]
//! base_url = "https://example.com"
//!
//! [pages]
//! "blog/post" = "/blog/:slug"
//!
//! [settings]
//! rainlab_blog_label = "News"
//! rainlab_blog_posturl = "/news"
//! ```

use crate::core::error::{Result, SiteSearchError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub modules: ModulesConfig,
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Page name to URL pattern
    #[serde(default)]
    pub pages: BTreeMap<String, String>,

    /// Provider settings (e.g. `rainlab_blog_label`)
    #[serde(default)]
    pub settings: BTreeMap<String, toml::Value>,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum query string length in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Keep other providers' results when one fails
    #[serde(default = "default_isolate_failures")]
    pub isolate_failures: bool,

    /// Run providers concurrently
    #[serde(default)]
    pub concurrent: bool,
}

/// Content store configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    /// JSON file holding blog posts; `None` until resolved against XDG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_file: Option<PathBuf>,
}

impl ContentConfig {
    /// Posts file to read, `./posts.json` when never resolved
    pub fn posts_file(&self) -> PathBuf {
        self.posts_file.clone().unwrap_or_else(default_posts_file)
    }
}

/// Installed content modules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModulesConfig {
    #[serde(default = "default_installed_modules")]
    pub installed: Vec<String>,
}

/// Page routing configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RoutingConfig {
    /// Prefix for routed page URLs (empty for site-relative URLs)
    #[serde(default)]
    pub base_url: String,
}

// Default value functions
fn default_max_query_length() -> usize {
    500
}

fn default_isolate_failures() -> bool {
    true
}

fn default_posts_file() -> PathBuf {
    PathBuf::from("./posts.json")
}

fn default_installed_modules() -> Vec<String> {
    vec!["RainLab.Blog".to_string()]
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_query_length: default_max_query_length(),
            isolate_failures: default_isolate_failures(),
            concurrent: false,
        }
    }
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            installed: default_installed_modules(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SiteSearchError::ConfigError(format!("Failed to read config file: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. SITESEARCH_CONFIG env var
    /// 2. XDG config file (~/.config/sitesearch/config.toml)
    /// 3. ./sitesearch.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SITESEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("sitesearch.toml").exists() {
                Self::from_file("sitesearch.toml")?
            } else {
                Self::default()
            }
        };

        // Default posts file lives in the XDG data directory
        if config.content.posts_file.is_none() {
            config.content.posts_file = Some(xdg.posts_file());
        }

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(posts_file) = env::var("SITESEARCH_POSTS_FILE") {
            self.content.posts_file = Some(PathBuf::from(posts_file));
        }
        if let Ok(max_query_len) = env::var("SITESEARCH_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
        if let Ok(isolate) = env::var("SITESEARCH_ISOLATE_FAILURES") {
            if let Ok(flag) = isolate.parse() {
                self.search.isolate_failures = flag;
            }
        }
        if let Ok(concurrent) = env::var("SITESEARCH_CONCURRENT") {
            if let Ok(flag) = concurrent.parse() {
                self.search.concurrent = flag;
            }
        }
    }

    /// Validate configuration values
    ///
    /// Provider settings are not checked here; a malformed base path
    /// produces a malformed URL, not an error.
    pub fn validate(&self) -> Result<()> {
        if self.search.max_query_length == 0 {
            return Err(SiteSearchError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Isolate failures: {}", self.search.isolate_failures);
        tracing::info!("  Concurrent: {}", self.search.concurrent);
        tracing::info!("  Posts file: {:?}", self.content.posts_file());
        tracing::info!("  Installed modules: {:?}", self.modules.installed);
        tracing::info!("  Routed pages: {}", self.pages.len());
        tracing::info!("  Provider settings: {}", self.settings.len());
    }
}
