//! Bot abstraction: everything a handler may ask the transport to do.
//!
//! [`crate::telegram::TelegramBotAdapter`] implements it over teloxide; tests use recording mocks.

use crate::core::error::Result;
use crate::core::types::{Chat, Message};
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends a message and returns its id so it can be edited later (status messages).
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String>;
    /// Edits an already-sent message. `message_id` is transport-specific (Telegram numeric string).
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;
    /// Shows a "typing..." indicator while a slow reply is being produced.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
    /// Downloads an attached file into `dest` (created or truncated). Returns bytes written.
    async fn download_file(&self, file_id: &str, dest: &Path) -> Result<u64>;
}
