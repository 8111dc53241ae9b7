use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::links::{PipelineOptions, DEFAULT_DOCS_LIMIT};

/// Default number of repositories shown per provider before "(top N)".
pub const DEFAULT_REPO_DISPLAY_LIMIT: usize = 3;

/// Global configuration loaded from `~/.config/coinlinks/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Maximum number of links kept in the Docs overlay.
    pub docs_limit: usize,
    /// Repositories shown per provider; the rest are summarized as overflow.
    pub repo_display_limit: usize,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            docs_limit: DEFAULT_DOCS_LIMIT,
            repo_display_limit: DEFAULT_REPO_DISPLAY_LIMIT,
        }
    }
}

impl LinksConfig {
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            docs_limit: self.docs_limit,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("coinlinks")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinksConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinksConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LinksConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
