// routes/app_routes.rs

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Extension, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::app_state::AppState;
use crate::handlers::chat_handlers::{create_chat, delete_chat, get_chat, send_message};
use crate::handlers::system_handlers::{health, not_found};
use crate::middleware::{panic_recovery::recover_from_panic, request_logging::log_request};

pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/chats", post(create_chat).fallback(not_found))
        .route("/chats/", post(create_chat).fallback(not_found))
        .route(
            "/chats/:id",
            get(get_chat).delete(delete_chat).fallback(not_found),
        )
        .route("/chats/:id/messages", post(send_message).fallback(not_found))
        .route("/chats/:id/messages/", post(send_message).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .fallback(not_found)
        .layer(Extension(state));

    with_request_layers(routes)
}

/// Wraps dispatch, outermost first: request log, trace span, panic recovery
fn with_request_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(recover_from_panic))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(log_request))
}
