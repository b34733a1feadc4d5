//! Message service for ATOM.
//!
//! Creates, updates and deletes messages on behalf of an explicitly passed
//! caller [`Identity`].
//!
//! Update and delete by a caller who is neither the author nor an admin are
//! silently skipped: the call succeeds and nothing is written.

use tracing::{debug, info, warn};

use super::types::{Message, MessageDraft};
use crate::auth::{can_modify, Identity};
use crate::datetime::now_timestamp;
use crate::db::{MessageStore, TopicStore};
use crate::topic::Topic;
use crate::{AtomError, Result};

/// Maximum length for message text (in characters).
pub const MAX_TEXT_LENGTH: usize = 100;

/// Validate message text: non-empty and at most [`MAX_TEXT_LENGTH`] characters.
///
/// Whitespace-only text is accepted.
pub fn validate_text(text: &str) -> Result<()> {
    if text.is_empty() || text.chars().count() > MAX_TEXT_LENGTH {
        return Err(AtomError::Validation(
            "Text of message is invalid".to_string(),
        ));
    }
    Ok(())
}

fn message_not_found(id: &str) -> AtomError {
    AtomError::NotFound(format!("Message not found with ID: {}", id))
}

fn topic_not_found() -> AtomError {
    AtomError::NotFound("Topic not found".to_string())
}

/// Service for the message lifecycle.
pub struct MessageService<M, T> {
    messages: M,
    topics: T,
}

impl<M: MessageStore, T: TopicStore> MessageService<M, T> {
    /// Create a new MessageService over the given stores.
    pub fn new(messages: M, topics: T) -> Self {
        Self { messages, topics }
    }

    /// Create a message under the topic `topic_id`.
    ///
    /// An unknown topic id is not an error: the message is stored without a
    /// topic.
    pub async fn create(
        &self,
        identity: &Identity,
        draft: MessageDraft,
        topic_id: &str,
    ) -> Result<Message> {
        validate_text(&draft.text)?;

        let topic_uuid = self
            .topics
            .find_by_uuid(topic_id)
            .await?
            .map(|topic| topic.topic_uuid);
        if topic_uuid.is_none() {
            debug!(topic_id, "Topic not found, storing message without topic");
        }

        let message = Message {
            message_uuid: uuid::Uuid::new_v4().to_string(),
            text: draft.text,
            author: identity.username.clone(),
            created_at: now_timestamp(),
            topic_uuid,
        };

        let saved = self.messages.save(&message).await?;
        info!(message = %saved.message_uuid, author = %saved.author, "Message created");
        Ok(saved)
    }

    /// Replace the text of message `message_id` and return its topic.
    ///
    /// The topic is returned whether or not the caller was allowed to write.
    pub async fn update(
        &self,
        identity: &Identity,
        message_id: &str,
        draft: MessageDraft,
    ) -> Result<Topic> {
        let mut message = self.find_message(message_id).await?;
        validate_text(&draft.text)?;

        if can_modify(identity, &message.author) {
            message.text = draft.text;
            message = self.messages.save(&message).await?;
            info!(message = %message.message_uuid, by = %identity.username, "Message updated");
        } else {
            warn!(
                message = %message.message_uuid,
                by = %identity.username,
                "Update skipped: caller is neither author nor admin"
            );
        }

        let topic_uuid = message.topic_uuid.as_deref().ok_or_else(topic_not_found)?;
        self.topics
            .find_by_uuid(topic_uuid)
            .await?
            .ok_or_else(topic_not_found)
    }

    /// Delete message `message_id`.
    pub async fn delete(&self, identity: &Identity, message_id: &str) -> Result<()> {
        let message = self.find_message(message_id).await?;

        if can_modify(identity, &message.author) {
            self.messages.delete(&message).await?;
            info!(message = %message.message_uuid, by = %identity.username, "Message deleted");
        } else {
            warn!(
                message = %message.message_uuid,
                by = %identity.username,
                "Delete skipped: caller is neither author nor admin"
            );
        }
        Ok(())
    }

    /// List the messages of a topic, oldest first.
    pub async fn list_for_topic(&self, topic_id: &str) -> Result<Vec<Message>> {
        self.messages.list_by_topic(topic_id).await
    }

    async fn find_message(&self, message_id: &str) -> Result<Message> {
        self.messages
            .find_by_uuid(message_id)
            .await?
            .ok_or_else(|| message_not_found(message_id))
    }
}
