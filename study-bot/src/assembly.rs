//! Wiring: stores, adapters and the handler chain.

use anyhow::{Context, Result};
use llm_client::{LlmClient, LlmConfig, OpenAILlmClient};
use openai_client::mask_token;
use pdf_reader::{PdfExtractReader, PdfExtractor};
use std::path::PathBuf;
use std::sync::Arc;
use study_memory::{KnowledgeStore, SessionStore};
use telegram_bot::{
    build_teloxide_bot, init_tracing, run_repl, Bot, HandlerChain, Message, TelegramBotAdapter,
};
use tracing::{error, info, instrument};

use crate::config::StudyConfig;
use crate::handlers::{ChatHandler, DocumentHandler, LoggingHandler, QuizHandler, StartHandler};

/// Everything the handlers share. Stores are cheap to clone and share their state.
#[derive(Clone)]
pub struct StudyComponents {
    pub bot: Arc<dyn Bot>,
    pub llm: Arc<dyn LlmClient>,
    pub pdf: Arc<dyn PdfExtractor>,
    pub knowledge: KnowledgeStore,
    pub sessions: SessionStore,
    pub download_dir: PathBuf,
}

/// Builds the chain: logging → start → quiz → document → chat.
pub fn build_handler_chain(components: &StudyComponents) -> HandlerChain {
    let c = components;
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(c.bot.clone(), c.knowledge.clone())))
        .add_handler(Arc::new(QuizHandler::new(
            c.bot.clone(),
            c.llm.clone(),
            c.knowledge.clone(),
            c.sessions.clone(),
        )))
        .add_handler(Arc::new(DocumentHandler::new(
            c.bot.clone(),
            c.pdf.clone(),
            c.knowledge.clone(),
            c.download_dir.clone(),
        )))
        .add_handler(Arc::new(ChatHandler::new(
            c.bot.clone(),
            c.llm.clone(),
            c.knowledge.clone(),
            c.sessions.clone(),
        )))
}

/// Builds the production LLM client from config.
pub fn build_llm_client(llm: &dyn LlmConfig) -> OpenAILlmClient {
    OpenAILlmClient::with_base_url(llm.api_key().to_string(), llm.base_url().to_string())
        .with_model(llm.model().to_string())
        .with_system_prompt_opt(llm.system_prompt().map(String::from))
}

/// Components and chain, without the Telegram REPL. Tests inject mock adapters through
/// [`StudyComponents`] and drive the chain with core messages.
pub struct StudyBot {
    pub components: StudyComponents,
    pub handler_chain: HandlerChain,
}

impl StudyBot {
    pub fn new(components: StudyComponents) -> Self {
        let handler_chain = build_handler_chain(&components);
        Self {
            components,
            handler_chain,
        }
    }

    /// Runs one message through the chain. Chain errors are logged, as in the REPL.
    pub async fn handle_core_message(&self, message: &Message) {
        if let Err(e) = self.handler_chain.handle(message).await {
            error!(error = %e, user_id = message.user.id, "Handler chain failed");
        }
    }
}

/// Main entry: validate config, init logging, build components, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: StudyConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.base.log_file)?;

    info!(
        model = %config.llm.model(),
        base_url = %config.llm.base_url(),
        api_key = %mask_token(config.llm.api_key()),
        knowledge_base_dir = %config.knowledge_base_dir.display(),
        download_dir = %config.download_dir.display(),
        "Initializing study bot"
    );

    let knowledge = KnowledgeStore::with_dir(&config.knowledge_base_dir).with_context(|| {
        format!(
            "Create knowledge base directory {}",
            config.knowledge_base_dir.display()
        )
    })?;

    let teloxide_bot = build_teloxide_bot(&config.base);
    let components = StudyComponents {
        bot: Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        llm: Arc::new(build_llm_client(&config.llm)),
        pdf: Arc::new(PdfExtractReader::new()),
        knowledge,
        sessions: SessionStore::new(),
        download_dir: config.download_dir.clone(),
    };
    let study_bot = StudyBot::new(components);

    info!("Bot started successfully");
    run_repl(teloxide_bot, study_bot.handler_chain).await?;
    Ok(())
}
