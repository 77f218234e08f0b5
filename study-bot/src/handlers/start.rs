//! `/start`: memory status and command summary.

use async_trait::async_trait;
use std::sync::Arc;
use study_memory::KnowledgeStore;
use telegram_bot::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

use super::stored_notes;
use crate::commands::StudyEvent;

/// Welcome text for `/start`; `has_memory` selects the status line.
pub fn start_text(has_memory: bool) -> String {
    let status = if has_memory {
        "🧠 I remember your last PDF."
    } else {
        "❌ Memory empty."
    };
    format!(
        "🤖 Study Architect Online\n\
         Status: {status}\n\n\
         Commands:\n\
         1. 📂 Upload PDF (Overwrites notes).\n\
         2. 🔥 /quiz -> Exam Mode.\n\
         3. 🎲 /quiz random -> Random Mode.\n\
         4. 🔍 /quiz [Topic] -> Topic Mode."
    )
}

pub struct StartHandler {
    bot: Arc<dyn Bot>,
    knowledge: KnowledgeStore,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, knowledge: KnowledgeStore) -> Self {
        Self { bot, knowledge }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if StudyEvent::classify(message) != StudyEvent::Start {
            return Ok(HandlerResponse::Continue);
        }

        // Blank notes count as empty, as in quiz and chat.
        let has_memory = stored_notes(&self.knowledge, message.user.id).await.is_ok();
        info!(user_id = message.user.id, has_memory, "Start requested");

        let text = start_text(has_memory);
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}
