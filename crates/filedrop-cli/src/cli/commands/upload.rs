//! `filedrop upload <path>` – one-shot upload of a local file.

use anyhow::{bail, Result};
use filedrop_core::client::{CurlTransfer, OpOutcome, UploadPanel};
use filedrop_core::config::FiledropConfig;
use std::path::Path;

pub fn run_upload(cfg: &FiledropConfig, path: &Path, server: Option<&str>) -> Result<()> {
    let base = server.unwrap_or(&cfg.server_url);
    let mut panel = UploadPanel::new(CurlTransfer::default(), base)?;

    match panel.upload(path)? {
        OpOutcome::Succeeded => {
            if let Some(target) = panel.current_target() {
                println!("Uploaded {} as {}", path.display(), target.relative_url);
            }
            Ok(())
        }
        OpOutcome::Failed => bail!("upload of {} failed", path.display()),
    }
}
