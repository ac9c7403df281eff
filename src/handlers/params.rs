// handlers/params.rs

use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// `{id}` path segment of the chat routes: a non-negative integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatId(pub i64);

impl ChatId {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i64>().ok().filter(|id| *id >= 0).map(ChatId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ChatId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("invalid chat id"))?;

        ChatId::parse(&raw).ok_or_else(|| AppError::validation("invalid chat id"))
    }
}

/// Query string of `GET /chats/{id}`. Never rejects: the first `limit`
/// pair wins and an unusable query is treated as empty.
#[derive(Debug, Default)]
pub struct HistoryParams {
    limit: Option<String>,
}

impl HistoryParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let limit = pairs
            .into_iter()
            .find(|(key, _)| key == "limit")
            .map(|(_, value)| value);
        Self { limit }
    }

    /// Requested page size; anything that is not an integer counts as absent (0)
    pub fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for HistoryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Ok(Self::from_pairs(pairs))
    }
}

/// Decodes a JSON request body regardless of its Content-Type
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|_| AppError::validation("invalid JSON"))
}
