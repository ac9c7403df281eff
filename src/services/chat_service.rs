// services/chat_service.rs

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    errors::AppError,
    models::{
        chat::{Chat, ChatWithMessages},
        message::Message,
    },
    repositories::{ChatRepository, MessageRepository},
    utils::text_rules::TextRule,
};

/// Page size used when the caller asks for nothing or for a non-positive limit
pub const DEFAULT_MESSAGE_LIMIT: i64 = 20;
/// Largest page a caller can get
pub const MAX_MESSAGE_LIMIT: i64 = 100;

/// Maps a requested page size onto `1..=MAX_MESSAGE_LIMIT`
pub fn normalize_limit(requested: i64) -> i64 {
    if requested <= 0 {
        DEFAULT_MESSAGE_LIMIT
    } else {
        requested.min(MAX_MESSAGE_LIMIT)
    }
}

/// Business rules for chats and messages. Validation and existence checks
/// run here, before anything reaches a repository write.
pub struct ChatService {
    chats: Arc<dyn ChatRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl ChatService {
    pub fn new(chats: Arc<dyn ChatRepository>, messages: Arc<dyn MessageRepository>) -> Self {
        Self { chats, messages }
    }

    pub async fn create_chat(&self, title: &str) -> Result<Chat, AppError> {
        let title = TextRule::TITLE.apply(title)?;

        let chat = self.chats.create(&title).await?;
        info!(chat_id = chat.id, "chat created");
        Ok(chat)
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message, AppError> {
        self.require_chat(chat_id).await?;
        let text = TextRule::MESSAGE_TEXT.apply(text)?;

        let message = self.messages.create(chat_id, &text).await?;
        debug!(chat_id, message_id = message.id, "message stored");
        Ok(message)
    }

    /// Returns the chat with up to `limit` of its newest messages, newest first
    pub async fn get_chat_with_messages(
        &self,
        chat_id: i64,
        limit: i64,
    ) -> Result<ChatWithMessages, AppError> {
        let chat = self.require_chat(chat_id).await?;
        let limit = normalize_limit(limit);

        let messages = self.messages.latest_for_chat(chat_id, limit).await?;
        Ok(ChatWithMessages { chat, messages })
    }

    /// Soft-deletes the chat; its messages become unreachable with it
    pub async fn delete_chat(&self, chat_id: i64) -> Result<(), AppError> {
        self.require_chat(chat_id).await?;

        // A concurrent delete may win between the lookup and the update
        if !self.chats.soft_delete(chat_id).await? {
            return Err(AppError::NotFound);
        }
        info!(chat_id, "chat deleted");
        Ok(())
    }

    async fn require_chat(&self, chat_id: i64) -> Result<Chat, AppError> {
        self.chats
            .find_active(chat_id)
            .await?
            .ok_or(AppError::NotFound)
    }
}
