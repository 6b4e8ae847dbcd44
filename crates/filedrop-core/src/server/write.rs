//! PUT/POST handling: store the raw request body at the mapped path.
//!
//! The body is written as-is, without checksums or transformation; an empty
//! body creates (or truncates to) an empty file.

use axum::response::Response;
use bytes::Bytes;
use std::io;
use std::path::Path;

use super::respond;

pub async fn serve(local: &Path, uri_path: &str, body: Bytes) -> Response {
    if let Ok(meta) = tokio::fs::metadata(local).await {
        if meta.is_dir() {
            return respond::forbidden(format!(
                "The following resource is a directory and cannot be overwritten as a file: {uri_path}"
            ));
        }
    }

    match tokio::fs::write(local, &body).await {
        Ok(()) => {
            tracing::debug!("stored {} ({} bytes)", local.display(), body.len());
            respond::created()
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::error!("cannot create {}: {}", local.display(), err);
            respond::not_found(format!(
                "Cannot find the resource or resources in the requested path: {uri_path}"
            ))
        }
        Err(err) => {
            tracing::error!("cannot write {}: {}", local.display(), err);
            respond::internal_error(format!(
                "There was an unexpected failure when creating the resource: {uri_path}"
            ))
        }
    }
}
