//! Topic module for ATOM.
//!
//! Topics group messages. The message service only resolves topics by
//! UUID; creation and listing live in [`TopicService`].

mod repository;
mod service;
mod types;

pub use repository::TopicRepository;
pub use service::{TopicService, MAX_TOPIC_TITLE_LENGTH};
pub use types::{NewTopic, Topic};
