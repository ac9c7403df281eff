use std::net::SocketAddr;

use axum::{
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Logs method, path and caller address of every request before dispatch
pub async fn log_request<B>(req: Request<B>, next: Next<B>) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    info!(method = %req.method(), path = %req.uri().path(), %peer, "incoming request");

    next.run(req).await
}
