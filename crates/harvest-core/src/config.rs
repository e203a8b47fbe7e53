use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::FetchOptions;

/// How an href from the listing page becomes a download URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkResolution {
    /// RFC 3986 reference resolution against the listing URL.
    #[default]
    Resolve,
    /// Filesystem-style join: `base + "/" + href`; an href starting with `/` replaces the base.
    PathJoin,
}

/// What the pipeline does when a single link fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemErrorPolicy {
    /// Stop processing at the first failed link.
    #[default]
    Abort,
    /// Log the failure and move on to the next link.
    Continue,
}

/// Global configuration loaded from `~/.config/harvest/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Listing page scanned for links.
    pub listing_url: String,
    /// Only hrefs ending with this suffix (case-sensitive) are downloaded.
    pub link_suffix: String,
    /// Directory downloaded files are kept in. Relative paths are taken from the working dir.
    pub output_dir: PathBuf,
    /// Record database location; defaults to `~/.local/state/harvest/records.db`.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    /// TCP connect timeout for every request.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout (listing page and each file).
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub link_resolution: LinkResolution,
    #[serde(default)]
    pub on_item_error: ItemErrorPolicy,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            listing_url: "http://ggsipu.ac.in/ExamResults/ExamResultsmain.htm".to_string(),
            link_suffix: ".pdf".to_string(),
            output_dir: PathBuf::from("pdfs"),
            database_path: None,
            connect_timeout_secs: 15,
            request_timeout_secs: 120,
            link_resolution: LinkResolution::default(),
            on_item_error: ItemErrorPolicy::default(),
        }
    }
}

impl HarvestConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// Rejects values libcurl would silently reinterpret: a timeout of 0 means "never".
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("connect_timeout_secs must be at least 1");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be at least 1");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harvest")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarvestConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path (`--config`).
pub fn load_or_init_at(path: &Path) -> Result<HarvestConfig> {
    if !path.exists() {
        let default_cfg = HarvestConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(path)
}

/// Load configuration from an existing file.
pub fn load_from(path: &Path) -> Result<HarvestConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: HarvestConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
