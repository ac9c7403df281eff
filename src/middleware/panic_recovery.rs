use std::any::Any;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::errors::INTERNAL_ERROR_MESSAGE;

/// Turns a panic inside a handler into a plain 500 response.
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn recover_from_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!(panic = %detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        INTERNAL_ERROR_MESSAGE,
    )
        .into_response()
}
