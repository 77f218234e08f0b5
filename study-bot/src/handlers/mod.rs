//! Study handlers, in chain order: logging, start, quiz, document, chat.
//!
//! Each handler classifies the message with [`crate::StudyEvent::classify`], returns `Continue`
//! for events it does not own and `Reply(text)` after replying.

mod chat;
mod document;
mod logging;
mod quiz;
mod start;

pub use chat::{ChatHandler, MSG_CHAT_FAILED, MSG_NO_PDF_LOADED};
pub use document::{
    DocumentHandler, MSG_NOT_A_PDF, MSG_PROCESSING, MSG_SAVED, MSG_UPLOAD_FAILED,
};
pub use logging::LoggingHandler;
pub use quiz::{QuizHandler, MSG_AI_ERROR, MSG_MEMORY_EMPTY};
pub use start::{start_text, StartHandler};

use crate::error::StudyError;
use study_memory::KnowledgeStore;
use telegram_bot::{Bot, Chat};
use tracing::warn;

/// Stored notes for `user_id`; blank text counts as nothing stored.
pub(crate) async fn stored_notes(
    knowledge: &KnowledgeStore,
    user_id: i64,
) -> Result<String, StudyError> {
    knowledge
        .get_context(user_id)
        .await
        .filter(|text| !text.trim().is_empty())
        .ok_or(StudyError::EmptyKnowledge)
}

/// Typing indicator before a slow model call. Failure only loses the indicator.
pub(crate) async fn show_typing(bot: &dyn Bot, chat: &Chat) {
    if let Err(e) = bot.send_typing(chat).await {
        warn!(error = %e, chat_id = chat.id, "Failed to send typing indicator");
    }
}
