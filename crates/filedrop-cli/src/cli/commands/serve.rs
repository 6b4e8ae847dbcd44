//! `filedrop serve` – serve a local directory over HTTP.

use anyhow::Result;
use filedrop_core::config::FiledropConfig;
use filedrop_core::server::{AccessMode, DirectoryPolicy, FileServerBuilder};
use std::net::IpAddr;
use std::path::PathBuf;

pub async fn run_serve(
    cfg: &FiledropConfig,
    root: Option<PathBuf>,
    listen: Option<IpAddr>,
    port: Option<u16>,
    writable: bool,
    index: Option<String>,
) -> Result<()> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let listen = listen.unwrap_or(cfg.serve.listen_address);
    let port = port.unwrap_or(cfg.serve.port);
    let mode = if writable || cfg.serve.writable {
        AccessMode::ReadWrite
    } else {
        AccessMode::ReadOnly
    };
    let policy = match index.or_else(|| cfg.serve.index_file.clone()) {
        Some(file) => DirectoryPolicy::ServeIndex(file),
        None => DirectoryPolicy::Forbid,
    };

    let server = FileServerBuilder::new(&root)
        .listen_address(listen)
        .port(port)
        .access_mode(mode)
        .directory_policy(policy)
        .bind()
        .await?;
    println!(
        "Serving {} on http://{} ({mode})",
        root.display(),
        server.local_addr()?
    );
    server.serve().await
}
