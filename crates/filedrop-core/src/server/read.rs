//! GET/HEAD handling: serve a mapped file, or apply the directory policy.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use std::path::Path;

use super::respond;
use super::DirectoryPolicy;

pub async fn serve(
    policy: &DirectoryPolicy,
    local: &Path,
    uri_path: &str,
    head_only: bool,
) -> Response {
    let meta = match tokio::fs::metadata(local).await {
        Ok(meta) => meta,
        Err(_) => return missing(uri_path),
    };

    if !meta.is_dir() {
        return send_file(local, uri_path, head_only).await;
    }

    match policy {
        DirectoryPolicy::Forbid => {
            respond::forbidden(format!("The following resource is forbidden: {uri_path}"))
        }
        DirectoryPolicy::ServeIndex(name) => {
            let index = local.join(name);
            match tokio::fs::metadata(&index).await {
                Ok(m) if m.is_file() => send_file(&index, uri_path, head_only).await,
                _ => missing(uri_path),
            }
        }
    }
}

fn missing(uri_path: &str) -> Response {
    respond::not_found(format!(
        "404: The requested resource was not found: {uri_path}"
    ))
}

async fn send_file(local: &Path, uri_path: &str, head_only: bool) -> Response {
    let bytes = match tokio::fs::read(local).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!("cannot read {}: {}", local.display(), err);
            return respond::internal_error(format!(
                "There was an unexpected failure when reading the resource: {uri_path}"
            ));
        }
    };

    let mime = mime_guess::from_path(local).first_or(mime::APPLICATION_OCTET_STREAM);
    let length = bytes.len();
    let body = if head_only { Vec::new() } else { bytes };

    let mut response = (StatusCode::OK, body).into_response();
    let headers = response.headers_mut();
    if let Ok(content_type) = HeaderValue::from_str(mime.as_ref()) {
        headers.insert(header::CONTENT_TYPE, content_type);
    }
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length as u64));
    response
}
