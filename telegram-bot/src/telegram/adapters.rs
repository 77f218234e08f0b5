//! teloxide → core conversions: [`TelegramUserWrapper`], [`TelegramMessageWrapper`].

use crate::core::{Chat, Document, Message, MessageDirection, ToCoreMessage, ToCoreUser, User};

/// Converts a Telegram user into the core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Converts a Telegram message into the core [`Message`]. Text messages carry their text;
/// document messages carry the attachment and its caption (if any) as content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let document = self.0.document().map(document_to_core);
        let message_type = if document.is_some() { "document" } else { "text" };
        let content = self
            .0
            .text()
            .or_else(|| self.0.caption())
            .unwrap_or("")
            .to_string();

        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: if self.0.chat.is_private() {
                    "private".to_string()
                } else {
                    "group".to_string()
                },
            },
            content,
            message_type: message_type.to_string(),
            direction: MessageDirection::Incoming,
            created_at: chrono::Utc::now(),
            reply_to_message_id: self.0.reply_to_message().map(|msg| msg.id.to_string()),
            document,
        }
    }
}

/// Maps a Telegram attachment to the core [`Document`]; the MIME type is reduced to its essence
/// (`type/subtype`, no parameters).
pub fn document_to_core(doc: &teloxide::types::Document) -> Document {
    Document {
        file_id: doc.file.id.0.clone(),
        file_name: doc.file_name.clone(),
        mime_type: doc.mime_type.as_ref().map(|m| m.essence_str().to_string()),
        file_size: doc.file.size,
    }
}
