use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Deployment base path prefixed to same-origin resources outside development mode.
pub const DEFAULT_BASE_PATH: &str = "ir-lab-ws-23";

/// Global configuration loaded from `~/.config/irx/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Absolute origin (e.g. `https://example.org`) that same-origin paths are joined onto.
    /// When unset, resolved paths stay origin-relative.
    #[serde(default)]
    pub origin: Option<String>,
    /// Deployment path segment, without slashes.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Development mode: same-origin paths are served from the root, without `base_path`.
    #[serde(default)]
    pub development: bool,
    /// Connect timeout for range requests, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Whole-request timeout for range requests, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_connect_timeout() -> u64 {
    15
}

fn default_timeout() -> u64 {
    30
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            origin: None,
            base_path: default_base_path(),
            development: false,
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("irx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ExplorerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ExplorerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file (e.g. `--config`).
pub fn load_from(path: &Path) -> Result<ExplorerConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ExplorerConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
