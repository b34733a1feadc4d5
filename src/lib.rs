//! ATOM - a topic-based message board service.
//!
//! Authenticated users post short messages under topics. Authors can edit
//! and delete their own messages; administrators can edit and delete any.

pub mod auth;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod logging;
pub mod message;
pub mod topic;
pub mod web;

pub use auth::{can_modify, Identity, Role};
pub use config::Config;
pub use db::{Database, MessageStore, TopicStore};
pub use error::{AtomError, Result};
pub use message::{Message, MessageDraft, MessageService};
pub use topic::{NewTopic, Topic, TopicService};
