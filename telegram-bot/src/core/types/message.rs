//! Message and direction types for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, document::Document, user::User};

/// Direction of the message (from user or from bot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// A single message with user, chat, content, and optional attachment.
///
/// `content` is the text, or the caption for a document message (empty when there is none).
/// `message_type` is `"text"` or `"document"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub message_type: String,
    pub direction: MessageDirection,
    pub created_at: DateTime<Utc>,
    pub reply_to_message_id: Option<String>,
    pub document: Option<Document>,
}

impl Message {
    /// True when the message carries a file attachment.
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }
}
