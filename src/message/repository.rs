//! Message repository for ATOM.

use async_trait::async_trait;

use super::types::Message;
use crate::db::{DbPool, MessageStore};
use crate::Result;

/// Repository for message persistence.
pub struct MessageRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> MessageRepository<'a> {
    /// Create a new MessageRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<'a> MessageStore for MessageRepository<'a> {
    async fn find_by_uuid(&self, message_uuid: &str) -> Result<Option<Message>> {
        let message = sqlx::query_as::<_, Message>(
            "SELECT message_uuid, text, author, created_at, topic_uuid
             FROM messages WHERE message_uuid = $1",
        )
        .bind(message_uuid)
        .fetch_optional(self.pool)
        .await?;
        Ok(message)
    }

    async fn save(&self, message: &Message) -> Result<Message> {
        // Author, timestamp and topic are fixed at insert; only text is
        // overwritten on conflict.
        let saved = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (message_uuid, text, author, created_at, topic_uuid)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT(message_uuid) DO UPDATE SET text = excluded.text
             RETURNING message_uuid, text, author, created_at, topic_uuid",
        )
        .bind(&message.message_uuid)
        .bind(&message.text)
        .bind(&message.author)
        .bind(&message.created_at)
        .bind(&message.topic_uuid)
        .fetch_one(self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete(&self, message: &Message) -> Result<bool> {
        let result = sqlx::query("DELETE FROM messages WHERE message_uuid = $1")
            .bind(&message.message_uuid)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_by_topic(&self, topic_uuid: &str) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT message_uuid, text, author, created_at, topic_uuid
             FROM messages WHERE topic_uuid = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(topic_uuid)
        .fetch_all(self.pool)
        .await?;
        Ok(messages)
    }
}
