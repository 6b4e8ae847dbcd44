//! Upload client: blocking transfer operations and the upload panel.

mod panel;
mod transfer;

pub use panel::{
    OpOutcome, PanelView, StatusTone, UploadPanel, UploadTarget, DELETE_FAILURE_MESSAGE,
    DELETE_SUCCESS_MESSAGE,
};
pub use transfer::{CurlTransfer, FileTransfer, TransferError};
