//! Templated plain-text responses for the statuses the file server emits.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub fn not_found(detail: String) -> Response {
    (StatusCode::NOT_FOUND, detail).into_response()
}

pub fn forbidden(detail: String) -> Response {
    (StatusCode::FORBIDDEN, detail).into_response()
}

pub fn internal_error(detail: String) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, detail).into_response()
}

/// 201 with an empty body; the uploaded resource's URL is the request URL.
pub fn created() -> Response {
    StatusCode::CREATED.into_response()
}

/// 204 after a successful delete.
pub fn deleted() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

pub fn not_implemented() -> Response {
    (StatusCode::NOT_IMPLEMENTED, "Method not implemented").into_response()
}
