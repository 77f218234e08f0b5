//! `/quiz [random | topic...]`: one question from the user's notes.

use async_trait::async_trait;
use llm_client::LlmClient;
use prompt::{format_question, quiz_prompt, QuizMode};
use std::sync::Arc;
use study_memory::{KnowledgeStore, SessionStore};
use telegram_bot::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

use super::{show_typing, stored_notes};
use crate::commands::StudyEvent;
use crate::error::StudyError;

pub const MSG_MEMORY_EMPTY: &str = "⚠️ Memory empty. Upload a PDF first.";
/// Prefix of the reply when generation fails; the error text follows.
pub const MSG_AI_ERROR: &str = "❌ AI Error:";

pub struct QuizHandler {
    bot: Arc<dyn Bot>,
    llm: Arc<dyn LlmClient>,
    knowledge: KnowledgeStore,
    sessions: SessionStore,
}

impl QuizHandler {
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

    /// Builds the prompt, asks the model and records the question. Returns the reply text.
    async fn generate(&self, message: &Message, mode: &QuizMode) -> std::result::Result<String, StudyError> {
        let notes = stored_notes(&self.knowledge, message.user.id).await?;

        show_typing(self.bot.as_ref(), &message.chat).await;

        let prompt = {
            let mut rng = rand::thread_rng();
            quiz_prompt(&notes, mode, &mut rng)
        };
        let question = self.llm.generate(&prompt).await?;

        self.sessions
            .set_last_question(message.user.id, question.clone())
            .await;
        Ok(format_question(mode, &question))
    }
}

#[async_trait]
impl Handler for QuizHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let StudyEvent::Quiz { args } = StudyEvent::classify(message) else {
            return Ok(HandlerResponse::Continue);
        };

        let mode = QuizMode::from_args(&args);
        info!(user_id = message.user.id, mode = mode.name(), "Quiz requested");

        let reply = match self.generate(message, &mode).await {
            Ok(text) => text,
            Err(StudyError::EmptyKnowledge) => {
                info!(user_id = message.user.id, "Quiz without stored notes");
                MSG_MEMORY_EMPTY.to_string()
            }
            Err(StudyError::Bot(e)) => return Err(e),
            Err(e) => {
                error!(error = %e, user_id = message.user.id, mode = mode.name(), "Quiz generation failed");
                format!("{} {}", MSG_AI_ERROR, e)
            }
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
