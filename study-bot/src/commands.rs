//! Classification of incoming messages into study events.

use telegram_bot::{Document, Message};

/// What an incoming message asks the bot to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyEvent {
    /// `/start`
    Start,
    /// `/quiz [args...]`; args are whitespace-separated.
    Quiz { args: Vec<String> },
    /// A message with a file attachment (any MIME type; the handler filters).
    Document(Document),
    /// Non-command text.
    Chat(String),
    /// Unknown commands and empty messages.
    Ignored,
}

impl StudyEvent {
    /// Classifies a message. Attachments win over the caption; `/cmd@botname` is treated as `/cmd`.
    pub fn classify(message: &Message) -> Self {
        if let Some(ref doc) = message.document {
            return StudyEvent::Document(doc.clone());
        }

        let text = message.content.trim();
        if text.is_empty() {
            return StudyEvent::Ignored;
        }

        let Some(rest) = text.strip_prefix('/') else {
            return StudyEvent::Chat(text.to_string());
        };

        let mut parts = rest.split_whitespace();
        let command = parts.next().unwrap_or("");
        let command = command.split('@').next().unwrap_or(command);

        match command.to_ascii_lowercase().as_str() {
            "start" => StudyEvent::Start,
            "quiz" => StudyEvent::Quiz {
                args: parts.map(String::from).collect(),
            },
            _ => StudyEvent::Ignored,
        }
    }
}
