//! Topic model for ATOM.

/// Topic entity grouping messages.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Topic {
    /// Internal row ID. Never exposed outside storage.
    pub id: i64,
    /// External handle (UUID v4).
    pub topic_uuid: String,
    /// Topic title.
    pub title: String,
    /// Username of the creator.
    pub author: String,
    /// Creation timestamp (RFC 3339, second precision).
    pub created_at: String,
}

/// Data for creating a new topic.
#[derive(Debug, Clone)]
pub struct NewTopic {
    /// Topic UUID.
    pub topic_uuid: String,
    /// Topic title.
    pub title: String,
    /// Username of the creator.
    pub author: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl NewTopic {
    /// Create a new topic with a fresh UUID and the current timestamp.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            topic_uuid: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            author: author.into(),
            created_at: crate::datetime::now_timestamp(),
        }
    }

    /// Use a specific UUID instead of a generated one.
    pub fn with_uuid(mut self, topic_uuid: impl Into<String>) -> Self {
        self.topic_uuid = topic_uuid.into();
        self
    }
}
