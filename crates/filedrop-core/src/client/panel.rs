//! The upload panel: a small UI controller wiring the upload and delete
//! actions to HTTP calls against one server.
//!
//! The panel owns the transient "current upload target" (set only by a
//! successful upload) and an explicit [`PanelView`] mirroring the regions of
//! the page it drives. Server and transport failures never escape the panel;
//! they are reported through the view. Operations take `&mut self`, so one
//! panel never has two requests in flight.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use url::Url;

use super::transfer::FileTransfer;

/// Fixed status line shown after a successful delete.
pub const DELETE_SUCCESS_MESSAGE: &str = "DELETE was successful.";
/// Fixed status line shown after a failed delete.
pub const DELETE_FAILURE_MESSAGE: &str = "Cannot delete file.";

/// The derived target of the most recent successful upload.
///
/// Invariant: `relative_url` is `"/"` followed by `file_name`, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub file_name: String,
    pub relative_url: String,
}

impl UploadTarget {
    /// Derives the target for a file name by prefixing `/`.
    pub fn from_file_name(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            relative_url: format!("/{file_name}"),
        }
    }
}

/// Tone of the delete status line (the page styles it green or red).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Danger,
}

/// Explicit stand-in for the page regions the panel mutates.
///
/// The page shows the uploaded file's link and name in two places each,
/// hence the paired slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelView {
    /// "Upload worked" region.
    pub upload_success_visible: bool,
    /// "Upload failed" region.
    pub upload_error_visible: bool,
    /// Link to the uploaded file.
    pub target_link: Option<String>,
    /// Second link slot.
    pub target_link_alt: Option<String>,
    /// Displayed name of the uploaded file.
    pub shown_file_name: Option<String>,
    /// Second name slot.
    pub shown_file_name_alt: Option<String>,
    /// Delete confirmation region, revealed by the first successful delete.
    pub delete_confirmation_visible: bool,
    /// Delete status line with its tone, if one is shown.
    pub delete_status: Option<(StatusTone, String)>,
}

/// Outcome of a panel operation that reached the transfer layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpOutcome {
    Succeeded,
    Failed,
}

/// UI controller for uploads and deletes against one server.
#[derive(Debug)]
pub struct UploadPanel<T> {
    transfer: T,
    base_url: String,
    current_target: Option<UploadTarget>,
    view: PanelView,
}

impl<T: FileTransfer> UploadPanel<T> {
    /// Creates a panel for a server base URL, e.g. `http://127.0.0.1:18181`.
    pub fn new(transfer: T, base_url: &str) -> Result<Self> {
        let parsed =
            Url::parse(base_url).with_context(|| format!("invalid server URL: {base_url}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("server URL must be http or https: {base_url}");
        }
        Ok(Self {
            transfer,
            base_url: base_url.trim_end_matches('/').to_string(),
            current_target: None,
            view: PanelView::default(),
        })
    }

    pub fn view(&self) -> &PanelView {
        &self.view
    }

    /// Target of the most recent successful upload, if it has not been
    /// deleted since.
    pub fn current_target(&self) -> Option<&UploadTarget> {
        self.current_target.as_ref()
    }

    fn absolute_url(&self, relative_url: &str) -> String {
        format!("{}{}", self.base_url, relative_url)
    }

    /// Uploads a local file: PUT of the file bytes to `/` + file name.
    ///
    /// `Err` covers local failures only (unreadable file, path without a
    /// usable name); a server or transport failure is reported through the
    /// view and the returned outcome.
    pub fn upload(&mut self, path: &Path) -> Result<OpOutcome> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("no usable file name in path: {}", path.display()))?
            .to_string();
        let bytes =
            fs::read(path).with_context(|| format!("cannot read file: {}", path.display()))?;
        Ok(self.upload_bytes(&file_name, &bytes))
    }

    /// Uploads in-memory bytes under a file name. See [`UploadPanel::upload`].
    pub fn upload_bytes(&mut self, file_name: &str, bytes: &[u8]) -> OpOutcome {
        let target = UploadTarget::from_file_name(file_name);
        let url = self.absolute_url(&target.relative_url);
        match self.transfer.put(&url, bytes) {
            Ok(()) => {
                self.apply_upload_success(target);
                OpOutcome::Succeeded
            }
            Err(err) => {
                tracing::debug!("upload of {} failed: {}", file_name, err);
                self.apply_upload_failure();
                OpOutcome::Failed
            }
        }
    }

    /// Deletes the most recently uploaded file.
    ///
    /// `Err` if no upload has succeeded yet; there is nothing to delete
    /// then, and no request is issued.
    pub fn delete_current(&mut self) -> Result<OpOutcome> {
        let target = self
            .current_target
            .clone()
            .context("no uploaded file to delete")?;
        let url = self.absolute_url(&target.relative_url);
        match self.transfer.delete(&url) {
            Ok(()) => {
                self.apply_delete_success();
                Ok(OpOutcome::Succeeded)
            }
            Err(err) => {
                tracing::debug!("delete of {} failed: {}", target.relative_url, err);
                self.apply_delete_failure();
                Ok(OpOutcome::Failed)
            }
        }
    }

    fn apply_upload_success(&mut self, target: UploadTarget) {
        self.view.upload_success_visible = true;
        self.view.upload_error_visible = false;
        self.view.target_link = Some(target.relative_url.clone());
        self.view.target_link_alt = Some(target.relative_url.clone());
        self.view.shown_file_name = Some(target.file_name.clone());
        self.view.shown_file_name_alt = Some(target.file_name.clone());
        self.view.delete_status = None;
        self.current_target = Some(target);
    }

    fn apply_upload_failure(&mut self) {
        self.view.upload_success_visible = false;
        self.view.upload_error_visible = true;
        self.view.delete_status = None;
    }

    fn apply_delete_success(&mut self) {
        self.view.delete_status = Some((StatusTone::Success, DELETE_SUCCESS_MESSAGE.to_string()));
        self.view.delete_confirmation_visible = true;
        // A repeated delete would target a resource that is already gone.
        self.current_target = None;
    }

    fn apply_delete_failure(&mut self) {
        // Target stays so the user can retry.
        self.view.delete_status = Some((StatusTone::Danger, DELETE_FAILURE_MESSAGE.to_string()));
    }
}
