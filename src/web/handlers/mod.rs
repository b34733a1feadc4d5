//! API handlers for the Web API.

pub mod message;
pub mod topic;

pub use message::*;
pub use topic::*;

use crate::message::{MessageRepository, MessageService};
use crate::topic::{TopicRepository, TopicService};
use crate::Database;

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database handle (the pool inside is shared between clones).
    pub db: Database,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Message service bound to this state's database.
    pub fn message_service(&self) -> MessageService<MessageRepository<'_>, TopicRepository<'_>> {
        MessageService::new(
            MessageRepository::new(self.db.pool()),
            TopicRepository::new(self.db.pool()),
        )
    }

    /// Topic service bound to this state's database.
    pub fn topic_service(&self) -> TopicService<TopicRepository<'_>> {
        TopicService::new(TopicRepository::new(self.db.pool()))
    }
}
