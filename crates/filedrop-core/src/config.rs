use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::server::DEFAULT_PORT;

/// Defaults for the `serve` command (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Address the server listens on.
    pub listen_address: IpAddr,
    /// Port the server listens on.
    pub port: u16,
    /// Whether uploads (PUT/POST) and deletes are allowed.
    pub writable: bool,
    /// File served from inside a directory when the directory itself is
    /// requested. When absent, directory requests are forbidden.
    #[serde(default)]
    pub index_file: Option<String>,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            listen_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            writable: false,
            index_file: None,
        }
    }
}

/// Global configuration loaded from `~/.config/filedrop/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiledropConfig {
    /// Server base URL used by `upload`/`delete`/`session` when no
    /// `--server` flag is given.
    pub server_url: String,
    /// Defaults for the `serve` command.
    #[serde(default)]
    pub serve: ServeConfig,
}

impl Default for FiledropConfig {
    fn default() -> Self {
        Self {
            server_url: format!("http://127.0.0.1:{DEFAULT_PORT}"),
            serve: ServeConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("filedrop")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FiledropConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FiledropConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FiledropConfig = toml::from_str(&data)?;
    Ok(cfg)
}
