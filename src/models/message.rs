use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /chats/{id}/messages`
#[derive(Deserialize, Debug, Default)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub text: Option<String>,
}
