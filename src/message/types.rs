//! Message model for ATOM.

/// Message entity: a short text posted under a topic.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Message {
    /// External handle (UUID v4).
    pub message_uuid: String,
    /// Message text, 1 to 100 characters.
    pub text: String,
    /// Username of the creator. Never changes after creation.
    pub author: String,
    /// Creation timestamp (RFC 3339, second precision).
    pub created_at: String,
    /// Topic this message belongs to; `None` when the topic id given at
    /// creation did not resolve.
    pub topic_uuid: Option<String>,
}

/// Caller-supplied message content.
///
/// Only the text is accepted from callers; identifiers, author, timestamp
/// and topic are assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    /// Message text.
    pub text: String,
}

impl MessageDraft {
    /// Create a draft with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
