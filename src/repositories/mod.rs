// repositories/mod.rs

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{chat::Chat, message::Message};

pub mod chat_repository;
pub mod message_repository;

#[cfg(test)]
pub mod memory_repository;

/// Failures reported by a storage backend
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No connection could be checked out of the pool
    #[error("Failed to get client from pool: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    /// The statement itself failed
    #[error("Query failed: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Failure injected by the in-memory store used in tests
    #[cfg(test)]
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for chats. Soft-deleted chats are invisible to every read.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Inserts a chat with an already validated title
    async fn create(&self, title: &str) -> Result<Chat, RepositoryError>;

    /// Looks a chat up by id, ignoring soft-deleted rows
    async fn find_active(&self, id: i64) -> Result<Option<Chat>, RepositoryError>;

    /// Marks a live chat as deleted. Returns false when nothing was updated.
    async fn soft_delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

/// Persistence for messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, chat_id: i64, text: &str) -> Result<Message, RepositoryError>;

    /// Newest-first page of a live chat's messages, at most `limit` long
    async fn latest_for_chat(&self, chat_id: i64, limit: i64)
        -> Result<Vec<Message>, RepositoryError>;
}
