use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::message::Message;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when the chat is soft-deleted; never exposed over HTTP
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Body of `POST /chats`. A missing or null title is treated as empty.
#[derive(Deserialize, Debug, Default)]
pub struct CreateChatRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// Response of `GET /chats/{id}`
#[derive(Serialize, Debug)]
pub struct ChatWithMessages {
    pub chat: Chat,
    pub messages: Vec<Message>,
}
