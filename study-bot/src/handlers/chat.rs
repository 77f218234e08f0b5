//! Free text: answers, give-ups, questions and small talk, judged by the model.

use async_trait::async_trait;
use llm_client::LlmClient;
use prompt::chat_prompt;
use std::sync::Arc;
use study_memory::{KnowledgeStore, SessionStore};
use telegram_bot::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

use super::{show_typing, stored_notes};
use crate::commands::StudyEvent;
use crate::error::StudyError;

pub const MSG_NO_PDF_LOADED: &str =
    "📂 No PDF loaded. Upload your notes as a PDF first, then type /quiz.";
/// Prefix of the reply when generation fails; the error text follows.
pub const MSG_CHAT_FAILED: &str = "❌ Error:";

pub struct ChatHandler {
    bot: Arc<dyn Bot>,
    llm: Arc<dyn LlmClient>,
    knowledge: KnowledgeStore,
    sessions: SessionStore,
}

impl ChatHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        llm: Arc<dyn LlmClient>,
        knowledge: KnowledgeStore,
        sessions: SessionStore,
    ) -> Self {
        Self {
            bot,
            llm,
            knowledge,
            sessions,
        }
    }

    async fn respond(&self, message: &Message, text: &str) -> std::result::Result<String, StudyError> {
        let notes = stored_notes(&self.knowledge, message.user.id).await?;
        let last_question = self.sessions.get_last_question(message.user.id).await;

        show_typing(self.bot.as_ref(), &message.chat).await;

        let prompt = chat_prompt(&notes, &last_question, text);
        Ok(self.llm.generate(&prompt).await?)
    }
}

#[async_trait]
impl Handler for ChatHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let StudyEvent::Chat(text) = StudyEvent::classify(message) else {
            return Ok(HandlerResponse::Continue);
        };

        let reply = match self.respond(message, &text).await {
            Ok(answer) => answer,
            Err(StudyError::EmptyKnowledge) => {
                info!(user_id = message.user.id, "Chat without stored notes");
                MSG_NO_PDF_LOADED.to_string()
            }
            Err(StudyError::Bot(e)) => return Err(e),
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Chat generation failed");
                format!("{} {}", MSG_CHAT_FAILED, e)
            }
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
