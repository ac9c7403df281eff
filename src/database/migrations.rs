use tokio_postgres::{Client, Error};

// Applies the schema. Every statement is idempotent so this runs on each startup.
pub async fn apply_migrations(client: &Client) -> Result<(), Error> {
    create_tables(client).await?;
    create_indexes(client).await?;

    Ok(())
}

async fn create_tables(client: &Client) -> Result<(), Error> {
    // Chats are soft-deleted through `deleted_at`
    let create_chats_table_query = "
        CREATE TABLE IF NOT EXISTS chats (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(200) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at TIMESTAMPTZ NULL
        )
    ";
    client.execute(create_chats_table_query, &[]).await?;

    // Removing a chat row removes its messages
    let create_messages_table_query = "
        CREATE TABLE IF NOT EXISTS messages (
            id BIGSERIAL PRIMARY KEY,
            chat_id BIGINT NOT NULL REFERENCES chats(id) ON DELETE CASCADE,
            text TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
    ";
    client.execute(create_messages_table_query, &[]).await?;

    Ok(())
}

async fn create_indexes(client: &Client) -> Result<(), Error> {
    client
        .batch_execute(
            "
            CREATE INDEX IF NOT EXISTS idx_chats_deleted_at ON chats (deleted_at);
            CREATE INDEX IF NOT EXISTS idx_messages_chat_id_created_at
                ON messages (chat_id, created_at DESC);
            ",
        )
        .await
}
