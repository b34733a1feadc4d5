//! Request DTOs for the Web API.

use serde::Deserialize;
use validator::Validate;

use crate::message::MessageDraft;

/// Create topic request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTopicRequest {
    /// Topic title.
    #[validate(length(min = 1, max = 100, message = "Must be 1 to 100 characters"))]
    pub title: String,
}

/// Create or update message request.
///
/// Only `text` is read; any other field a client sends (such as an author)
/// is ignored. A missing or null `text` reads as empty and is rejected by
/// the message service like any other invalid text.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    /// Message text. Checked by the message service.
    #[serde(default)]
    pub text: Option<String>,
}

impl MessageRequest {
    /// Turn the request into a draft.
    pub fn into_draft(self) -> MessageDraft {
        MessageDraft::new(self.text.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(json: &str) -> MessageDraft {
        serde_json::from_str::<MessageRequest>(json)
            .unwrap()
            .into_draft()
    }

    #[test]
    fn test_message_request_text() {
        assert_eq!(draft(r#"{"text":"hello"}"#).text, "hello");
        assert_eq!(draft(r#"{"text":"hi","author":"mallory"}"#).text, "hi");
    }

    #[test]
    fn test_message_request_missing_text_is_empty() {
        assert_eq!(draft("{}").text, "");
        assert_eq!(draft(r#"{"text":null}"#).text, "");
    }

    #[test]
    fn test_create_topic_request_title_length() {
        let ok = CreateTopicRequest {
            title: "General".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty = CreateTopicRequest {
            title: String::new(),
        };
        assert!(empty.validate().is_err());
    }
}
