//! Response DTOs for the Web API.

use serde::Serialize;

use crate::message::Message;
use crate::topic::Topic;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Topic as exposed by the API. Only the UUID is used as identifier.
#[derive(Debug, Serialize)]
pub struct TopicResponse {
    /// Topic UUID.
    pub id: String,
    /// Topic title.
    pub title: String,
    /// Creator username.
    pub author: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.topic_uuid,
            title: topic.title,
            author: topic.author,
            created_at: topic.created_at,
        }
    }
}

/// Message as exposed by the API.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Message UUID.
    pub id: String,
    /// Message text.
    pub text: String,
    /// Author username.
    pub author: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Topic UUID, null when the message has no topic.
    pub topic_id: Option<String>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.message_uuid,
            text: message.text,
            author: message.author,
            created_at: message.created_at,
            topic_id: message.topic_uuid,
        }
    }
}

/// Topic with its messages.
#[derive(Debug, Serialize)]
pub struct TopicDetailResponse {
    /// The topic.
    #[serde(flatten)]
    pub topic: TopicResponse,
    /// Messages, oldest first.
    pub messages: Vec<MessageResponse>,
}
