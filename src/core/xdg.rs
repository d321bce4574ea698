//! XDG Base Directory Support
//!
//! Resolves where sitesearch looks for its config file and its
//! default posts file on Linux/Unix systems.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// XDG directory structure for sitesearch
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit SITESEARCH_* env vars
    /// 2. XDG_* environment variables
    /// 3. XDG defaults (~/.config, ~/.local/share)
    pub fn new() -> Self {
        Self {
            config_dir: resolve("SITESEARCH_CONFIG_DIR", "XDG_CONFIG_HOME", &[".config"]),
            data_dir: resolve(
                "SITESEARCH_DATA_DIR",
                "XDG_DATA_HOME",
                &[".local", "share"],
            ),
        }
    }

    /// All directories under one root (`<root>/config`, `<root>/data`)
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            config_dir: root.join("config"),
            data_dir: root.join("data"),
        }
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Get default posts file path
    pub fn posts_file(&self) -> PathBuf {
        self.data_dir.join("posts.json")
    }

    /// Create all XDG directories if they don't exist
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)?;
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::info!("XDG directories resolved:");
        tracing::info!("  Config: {:?}", self.config_dir);
        tracing::info!("  Data: {:?}", self.data_dir);
        tracing::info!("  Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(override_var: &str, xdg_var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(dir) = env::var(override_var) {
        return PathBuf::from(dir);
    }

    if let Ok(xdg) = env::var(xdg_var) {
        return PathBuf::from(xdg).join("sitesearch");
    }

    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    for segment in home_default {
        path.push(segment);
    }
    path.join("sitesearch")
}
