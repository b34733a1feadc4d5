//! Topic repository for ATOM.

use async_trait::async_trait;

use super::types::{NewTopic, Topic};
use crate::db::{DbPool, TopicStore};
use crate::{AtomError, Result};

/// Repository for topic persistence.
pub struct TopicRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> TopicRepository<'a> {
    /// Create a new TopicRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Get a topic by internal ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Topic>> {
        let topic = sqlx::query_as::<_, Topic>(
            "SELECT id, topic_uuid, title, author, created_at FROM topics WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(topic)
    }
}

#[async_trait]
impl<'a> TopicStore for TopicRepository<'a> {
    async fn find_by_uuid(&self, topic_uuid: &str) -> Result<Option<Topic>> {
        let topic = sqlx::query_as::<_, Topic>(
            "SELECT id, topic_uuid, title, author, created_at FROM topics WHERE topic_uuid = $1",
        )
        .bind(topic_uuid)
        .fetch_optional(self.pool)
        .await?;
        Ok(topic)
    }

    async fn create(&self, new_topic: &NewTopic) -> Result<Topic> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO topics (topic_uuid, title, author, created_at)
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&new_topic.topic_uuid)
        .bind(&new_topic.title)
        .bind(&new_topic.author)
        .bind(&new_topic.created_at)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| AtomError::NotFound("Topic not found".to_string()))
    }

    async fn list(&self) -> Result<Vec<Topic>> {
        let topics = sqlx::query_as::<_, Topic>(
            "SELECT id, topic_uuid, title, author, created_at
             FROM topics ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(topics)
    }
}
