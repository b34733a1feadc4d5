//! Message module for ATOM.
//!
//! This module provides:
//! - The Message model and caller-supplied drafts
//! - Message persistence over SQLite
//! - The message service (create, update, delete) with author/admin checks

mod repository;
mod service;
mod types;

pub use repository::MessageRepository;
pub use service::{validate_text, MessageService, MAX_TEXT_LENGTH};
pub use types::{Message, MessageDraft};
