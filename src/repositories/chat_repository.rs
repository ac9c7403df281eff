// repositories/chat_repository.rs

use async_trait::async_trait;
use deadpool_postgres::{Client, Pool};
use tokio_postgres::Row;

use super::{ChatRepository, RepositoryError};
use crate::models::chat::Chat;

const CHAT_COLUMNS: &str = "id, title, created_at, updated_at, deleted_at";

pub struct PgChatRepository {
    pool: Pool,
}

impl PgChatRepository {
    pub fn new(pool: Pool) -> Self {
        PgChatRepository { pool }
    }

    async fn client(&self) -> Result<Client, RepositoryError> {
        Ok(self.pool.get().await?)
    }
}

fn chat_from_row(row: &Row) -> Result<Chat, tokio_postgres::Error> {
    Ok(Chat {
        id: row.try_get(0)?,
        title: row.try_get(1)?,
        created_at: row.try_get(2)?,
        updated_at: row.try_get(3)?,
        deleted_at: row.try_get(4)?,
    })
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    async fn create(&self, title: &str) -> Result<Chat, RepositoryError> {
        let query = format!(
            "INSERT INTO chats (title) VALUES ($1) RETURNING {}",
            CHAT_COLUMNS
        );

        let client = self.client().await?;
        let row = client.query_one(query.as_str(), &[&title]).await?;
        Ok(chat_from_row(&row)?)
    }

    async fn find_active(&self, id: i64) -> Result<Option<Chat>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM chats WHERE id = $1 AND deleted_at IS NULL",
            CHAT_COLUMNS
        );

        let client = self.client().await?;
        match client.query_opt(query.as_str(), &[&id]).await? {
            Some(row) => Ok(Some(chat_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let query = "
            UPDATE chats
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
        ";

        let client = self.client().await?;
        let updated = client.execute(query, &[&id]).await?;
        Ok(updated > 0)
    }
}
