// repositories/memory_repository.rs

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{ChatRepository, MessageRepository, RepositoryError};
use crate::models::{chat::Chat, message::Message};

#[derive(Default)]
struct State {
    chats: Vec<Chat>,
    messages: Vec<Message>,
    offline: bool,
}

/// In-process store backing both repositories in tests.
/// Mirrors the Postgres behaviour: sequential ids, soft delete, newest-first reads.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail as if the database were down
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    /// Raw message count for a chat, including rows hidden by a soft delete
    pub fn stored_message_count(&self, chat_id: i64) -> usize {
        let state = self.state.lock().unwrap();
        state.messages.iter().filter(|m| m.chat_id == chat_id).count()
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&mut State) -> Result<T, RepositoryError>,
    ) -> Result<T, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.offline {
            return Err(RepositoryError::Unavailable("store is offline".to_string()));
        }
        f(&mut *state)
    }
}

fn is_live(state: &State, chat_id: i64) -> bool {
    state
        .chats
        .iter()
        .any(|c| c.id == chat_id && c.deleted_at.is_none())
}

#[async_trait]
impl ChatRepository for MemoryStore {
    async fn create(&self, title: &str) -> Result<Chat, RepositoryError> {
        self.with_state(|state| {
            let now = Utc::now();
            let chat = Chat {
                id: state.chats.len() as i64 + 1,
                title: title.to_string(),
                created_at: now,
                updated_at: now,
                deleted_at: None,
            };
            state.chats.push(chat.clone());
            Ok(chat)
        })
    }

    async fn find_active(&self, id: i64) -> Result<Option<Chat>, RepositoryError> {
        self.with_state(|state| {
            Ok(state
                .chats
                .iter()
                .find(|c| c.id == id && c.deleted_at.is_none())
                .cloned())
        })
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, RepositoryError> {
        self.with_state(|state| {
            match state
                .chats
                .iter_mut()
                .find(|c| c.id == id && c.deleted_at.is_none())
            {
                Some(chat) => {
                    let now = Utc::now();
                    chat.deleted_at = Some(now);
                    chat.updated_at = now;
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn create(&self, chat_id: i64, text: &str) -> Result<Message, RepositoryError> {
        self.with_state(|state| {
            // Same outcome as the foreign key on messages.chat_id
            if !state.chats.iter().any(|c| c.id == chat_id) {
                return Err(RepositoryError::Unavailable(format!(
                    "chat {} does not exist",
                    chat_id
                )));
            }
            // Keep creation times monotonic like a database sequence would
            let created_at = state
                .messages
                .last()
                .map_or_else(Utc::now, |last| last.created_at.max(Utc::now()));
            let message = Message {
                id: state.messages.len() as i64 + 1,
                chat_id,
                text: text.to_string(),
                created_at,
            };
            state.messages.push(message.clone());
            Ok(message)
        })
    }

    async fn latest_for_chat(
        &self,
        chat_id: i64,
        limit: i64,
    ) -> Result<Vec<Message>, RepositoryError> {
        self.with_state(|state| {
            if !is_live(state, chat_id) {
                return Ok(Vec::new());
            }
            let mut messages: Vec<Message> = state
                .messages
                .iter()
                .filter(|m| m.chat_id == chat_id)
                .cloned()
                .collect();
            messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            messages.truncate(limit.max(0) as usize);
            Ok(messages)
        })
    }
}
