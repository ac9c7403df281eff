use axum::{
    body::Bytes,
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use tracing::debug;

use super::params::{parse_json_body, ChatId, HistoryParams};
use crate::{
    app_state::AppState,
    errors::AppError,
    models::{chat::CreateChatRequest, message::SendMessageRequest},
};

/// POST /chats
pub async fn create_chat(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateChatRequest = parse_json_body(&body)?;

    let chat = state
        .chat_service
        .create_chat(payload.title.as_deref().unwrap_or_default())
        .await?;

    Ok((StatusCode::CREATED, Json(chat)))
}

/// POST /chats/{id}/messages
pub async fn send_message(
    Extension(state): Extension<AppState>,
    ChatId(chat_id): ChatId,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: SendMessageRequest = parse_json_body(&body)?;

    let message = state
        .chat_service
        .send_message(chat_id, payload.text.as_deref().unwrap_or_default())
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /chats/{id}?limit=N
pub async fn get_chat(
    Extension(state): Extension<AppState>,
    ChatId(chat_id): ChatId,
    params: HistoryParams,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit();
    debug!(chat_id, limit, "fetching chat history");

    let page = state
        .chat_service
        .get_chat_with_messages(chat_id, limit)
        .await?;

    Ok(Json(page))
}

/// DELETE /chats/{id}
pub async fn delete_chat(
    Extension(state): Extension<AppState>,
    ChatId(chat_id): ChatId,
) -> Result<impl IntoResponse, AppError> {
    state.chat_service.delete_chat(chat_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
