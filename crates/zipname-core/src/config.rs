use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::{Compression, DEFAULT_ARCHIVE_NAME};
use crate::policy::{DigitsInput, RawPolicy, DEFAULT_PREFIX};
use crate::upload::DEFAULT_MAX_UPLOAD_BYTES;

/// Default policy fields (`[defaults]` section), used when a request omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyDefaults {
    pub prefix: String,
    pub numbering_style: String,
    /// Counter width; integer or string.
    pub digits: DigitsInput,
    /// Comma-separated cleanup options, e.g. "spaces,lowercase".
    #[serde(default)]
    pub cleanup: String,
}

impl Default for PolicyDefaults {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            numbering_style: "pad".to_string(),
            digits: DigitsInput::default(),
            cleanup: String::new(),
        }
    }
}

impl PolicyDefaults {
    /// Defaults as a fully populated raw policy, for merging under request input.
    pub fn to_raw(&self) -> RawPolicy {
        RawPolicy {
            prefix: Some(self.prefix.clone()),
            numbering_style: Some(self.numbering_style.clone()),
            digits: Some(self.digits.clone()),
            cleanup: Some(self.cleanup.clone()),
        }
    }
}

/// Global configuration loaded from `~/.config/zipname/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZipnameConfig {
    /// File name of the produced archive.
    pub archive_name: String,
    /// Maximum total size of one upload batch in bytes.
    pub max_upload_bytes: u64,
    /// Entry compression: "deflated" (default) or "stored".
    #[serde(default)]
    pub compression: Compression,
    #[serde(default)]
    pub defaults: PolicyDefaults,
}

impl Default for ZipnameConfig {
    fn default() -> Self {
        Self {
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            compression: Compression::default(),
            defaults: PolicyDefaults::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("zipname")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ZipnameConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ZipnameConfig::default();
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

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<ZipnameConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ZipnameConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
