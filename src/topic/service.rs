//! Topic service for ATOM.

use tracing::info;

use super::types::{NewTopic, Topic};
use crate::auth::Identity;
use crate::db::TopicStore;
use crate::{AtomError, Result};

/// Maximum length for topic titles (in characters).
pub const MAX_TOPIC_TITLE_LENGTH: usize = 100;

/// Validate a topic title.
fn validate_title(title: &str) -> Result<()> {
    let char_count = title.chars().count();
    if title.trim().is_empty() || char_count > MAX_TOPIC_TITLE_LENGTH {
        return Err(AtomError::Validation(
            "Title of topic is invalid".to_string(),
        ));
    }
    Ok(())
}

/// Service for topic operations.
pub struct TopicService<T> {
    topics: T,
}

impl<T: TopicStore> TopicService<T> {
    /// Create a new TopicService over the given store.
    pub fn new(topics: T) -> Self {
        Self { topics }
    }

    /// Create a topic authored by the caller.
    pub async fn create(&self, identity: &Identity, title: impl Into<String>) -> Result<Topic> {
        let title = title.into();
        validate_title(&title)?;

        let topic = self
            .topics
            .create(&NewTopic::new(title, identity.username.clone()))
            .await?;
        info!(topic = %topic.topic_uuid, author = %topic.author, "Topic created");
        Ok(topic)
    }

    /// Get a topic by UUID.
    pub async fn get(&self, topic_id: &str) -> Result<Topic> {
        self.topics
            .find_by_uuid(topic_id)
            .await?
            .ok_or_else(|| AtomError::NotFound("Topic not found".to_string()))
    }

    /// List all topics, newest first.
    pub async fn list(&self) -> Result<Vec<Topic>> {
        self.topics.list().await
    }
}
