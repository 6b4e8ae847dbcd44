//! `filedrop delete <name>` – one-shot delete of a server resource.

use anyhow::Result;
use filedrop_core::client::{CurlTransfer, FileTransfer};
use filedrop_core::config::FiledropConfig;

pub fn run_delete(cfg: &FiledropConfig, name: &str, server: Option<&str>) -> Result<()> {
    let base = server.unwrap_or(&cfg.server_url).trim_end_matches('/');
    let relative = if name.starts_with('/') {
        name.to_string()
    } else {
        format!("/{name}")
    };
    let url = format!("{base}{relative}");

    CurlTransfer::default().delete(&url)?;
    println!("Deleted {url}");
    Ok(())
}
