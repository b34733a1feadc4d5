//! Store traits consumed by the services.
//!
//! The services only see these traits; the sqlx repositories implement
//! them over a [`DbPool`](crate::db::DbPool).

use async_trait::async_trait;

use crate::message::Message;
use crate::topic::{NewTopic, Topic};
use crate::Result;

/// Persistence for messages.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Find a message by its UUID.
    async fn find_by_uuid(&self, message_uuid: &str) -> Result<Option<Message>>;

    /// Insert the message, or overwrite the text of the stored message with
    /// the same UUID. Returns the stored row.
    async fn save(&self, message: &Message) -> Result<Message>;

    /// Delete the message. Returns true if a row was removed.
    async fn delete(&self, message: &Message) -> Result<bool>;

    /// List the messages of a topic, oldest first.
    async fn list_by_topic(&self, topic_uuid: &str) -> Result<Vec<Message>>;
}

/// Persistence for topics.
#[async_trait]
pub trait TopicStore: Send + Sync {
    /// Find a topic by its UUID.
    async fn find_by_uuid(&self, topic_uuid: &str) -> Result<Option<Topic>>;

    /// Create a topic and return the stored row.
    async fn create(&self, new_topic: &NewTopic) -> Result<Topic>;

    /// List all topics, newest first.
    async fn list(&self) -> Result<Vec<Topic>>;
}
