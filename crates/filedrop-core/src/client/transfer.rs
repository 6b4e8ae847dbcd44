//! Blocking HTTP transfer operations.
//!
//! Uses the curl crate (libcurl) for the two calls the upload panel makes:
//! PUT of raw bytes and DELETE. Any status outside 2xx is an error; both
//! requests carry `Cache-Control: no-cache`.

use std::time::Duration;
use thiserror::Error;

/// Error raised by a single transfer operation.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The server answered outside the 2xx range.
    #[error("{method} {url} returned HTTP {code}")]
    Status {
        method: &'static str,
        url: String,
        code: u32,
    },
    /// Transport-level failure (resolve, connect, send, receive).
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: curl::Error,
    },
}

/// The HTTP operations the upload panel performs. Implemented by
/// [`CurlTransfer`]; tests substitute a recording fake.
pub trait FileTransfer {
    /// PUT `body` to `url`, byte for byte, as `application/octet-stream`.
    fn put(&self, url: &str, body: &[u8]) -> Result<(), TransferError>;
    /// DELETE `url` with no request body.
    fn delete(&self, url: &str) -> Result<(), TransferError>;
}

/// libcurl-backed transfer operations.
#[derive(Debug, Default, Clone)]
pub struct CurlTransfer;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const TOTAL_TIMEOUT: Duration = Duration::from_secs(3600);

impl FileTransfer for CurlTransfer {
    fn put(&self, url: &str, body: &[u8]) -> Result<(), TransferError> {
        const METHOD: &str = "PUT";
        let fail = |source: curl::Error| TransferError::Transport {
            method: METHOD,
            url: url.to_string(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(fail)?;
        easy.put(true).map_err(fail)?;
        easy.in_filesize(body.len() as u64).map_err(fail)?;
        easy.connect_timeout(CONNECT_TIMEOUT).map_err(fail)?;
        easy.timeout(TOTAL_TIMEOUT).map_err(fail)?;

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/octet-stream")
            .map_err(fail)?;
        list.append("Cache-Control: no-cache").map_err(fail)?;
        easy.http_headers(list).map_err(fail)?;

        {
            let mut remaining = body;
            let mut transfer = easy.transfer();
            transfer
                .read_function(move |into| {
                    let n = remaining.len().min(into.len());
                    into[..n].copy_from_slice(&remaining[..n]);
                    remaining = &remaining[n..];
                    Ok(n)
                })
                .map_err(fail)?;
            // Discard any response body; only the status matters.
            transfer.write_function(|data| Ok(data.len())).map_err(fail)?;
            transfer.perform().map_err(fail)?;
        }

        check_status(METHOD, url, easy.response_code().map_err(fail)?)
    }

    fn delete(&self, url: &str) -> Result<(), TransferError> {
        const METHOD: &str = "DELETE";
        let fail = |source: curl::Error| TransferError::Transport {
            method: METHOD,
            url: url.to_string(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(fail)?;
        easy.custom_request("DELETE").map_err(fail)?;
        easy.connect_timeout(CONNECT_TIMEOUT).map_err(fail)?;
        easy.timeout(TOTAL_TIMEOUT).map_err(fail)?;

        let mut list = curl::easy::List::new();
        list.append("Cache-Control: no-cache").map_err(fail)?;
        easy.http_headers(list).map_err(fail)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| Ok(data.len())).map_err(fail)?;
            transfer.perform().map_err(fail)?;
        }

        check_status(METHOD, url, easy.response_code().map_err(fail)?)
    }
}

fn check_status(method: &'static str, url: &str, code: u32) -> Result<(), TransferError> {
    if (200..300).contains(&code) {
        Ok(())
    } else {
        Err(TransferError::Status {
            method,
            url: url.to_string(),
            code,
        })
    }
}
