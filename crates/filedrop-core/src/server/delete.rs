//! DELETE handling: remove the file at the mapped path.

use axum::response::Response;
use std::path::Path;

use super::respond;

pub async fn serve(local: &Path, uri_path: &str) -> Response {
    let meta = match tokio::fs::metadata(local).await {
        Ok(meta) => meta,
        Err(_) => return respond::not_found(format!("Resource cannot be found: {uri_path}")),
    };

    if meta.is_dir() {
        return respond::forbidden(format!("The following resource is forbidden: {uri_path}"));
    }

    match tokio::fs::remove_file(local).await {
        Ok(()) => {
            tracing::debug!("deleted {}", local.display());
            respond::deleted()
        }
        Err(err) => {
            tracing::error!("cannot delete {}: {}", local.display(), err);
            respond::internal_error(format!(
                "Server wasn't able to fulfil the delete request on resource: {uri_path}"
            ))
        }
    }
}
