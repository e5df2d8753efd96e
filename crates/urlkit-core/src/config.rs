use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User-Agent sent on redirect probes; servers routinely answer HEAD
/// differently (or not at all) for non-browser agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Global configuration loaded from `~/.config/urlkit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlkitConfig {
    /// Connect timeout in seconds for redirect HEAD probes.
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds for redirect HEAD probes.
    pub read_timeout_secs: u64,
    /// Connect timeout in seconds for GET downloads.
    pub fetch_connect_timeout_secs: u64,
    /// Overall timeout in seconds for GET downloads; 0 = no limit.
    pub fetch_timeout_secs: u64,
    /// Maximum redirect hops before resolution gives up with an absent result.
    pub max_redirects: u32,
    /// User-Agent header sent on every request.
    pub user_agent: String,
}

impl Default for UrlkitConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            read_timeout_secs: 10,
            fetch_connect_timeout_secs: 600,
            fetch_timeout_secs: 0,
            max_redirects: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlkitConfig = toml::from_str(&data)?;
    Ok(cfg)
}
