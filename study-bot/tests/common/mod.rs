//! Shared test helpers: mock adapters, message builders, and a bot wired to them.

#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_llm;
pub mod mock_pdf;

use std::sync::Arc;

use chrono::Utc;
use study_bot::{StudyBot, StudyComponents};
use study_memory::{KnowledgeStore, SessionStore};
use telegram_bot::{Chat, Document, Message, MessageDirection, User};
use tempfile::TempDir;

pub use mock_bot::MockBot;
pub use mock_llm::MockLlm;
pub use mock_pdf::MockPdf;

pub const USER_ID: i64 = 4242;

pub fn text_message(content: &str) -> Message {
    Message {
        id: "100".to_string(),
        user: User {
            id: USER_ID,
            username: Some("student".to_string()),
            first_name: Some("Sam".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: USER_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
        reply_to_message_id: None,
        document: None,
    }
}

pub fn document_message(mime_type: &str) -> Message {
    let mut message = text_message("");
    message.message_type = "document".to_string();
    message.document = Some(Document {
        file_id: "BQACAgIAAxkBAAIC".to_string(),
        file_name: Some("notes".to_string()),
        mime_type: Some(mime_type.to_string()),
        file_size: 2048,
    });
    message
}

/// A study bot over mocks, with knowledge and downloads in temp dirs.
pub struct Harness {
    pub bot: Arc<MockBot>,
    pub llm: Arc<MockLlm>,
    pub pdf: Arc<MockPdf>,
    pub knowledge: KnowledgeStore,
    pub sessions: SessionStore,
    pub study_bot: StudyBot,
    pub knowledge_dir: TempDir,
    pub download_dir: TempDir,
}

impl Harness {
    pub fn new(llm: MockLlm, pdf: MockPdf) -> Self {
        let knowledge_dir = tempfile::tempdir().unwrap();
        let download_dir = tempfile::tempdir().unwrap();
        let bot = Arc::new(MockBot::new());
        let llm = Arc::new(llm);
        let pdf = Arc::new(pdf);
        let knowledge = KnowledgeStore::with_dir(knowledge_dir.path()).unwrap();
        let sessions = SessionStore::new();

        let study_bot = StudyBot::new(StudyComponents {
            bot: bot.clone(),
            llm: llm.clone(),
            pdf: pdf.clone(),
            knowledge: knowledge.clone(),
            sessions: sessions.clone(),
            download_dir: download_dir.path().to_path_buf(),
        });

        Self {
            bot,
            llm,
            pdf,
            knowledge,
            sessions,
            study_bot,
            knowledge_dir,
            download_dir,
        }
    }

    pub async fn send(&self, message: &Message) {
        self.study_bot.handle_core_message(message).await;
    }

    /// Entries currently in the download directory.
    pub fn download_dir_entries(&self) -> usize {
        std::fs::read_dir(self.download_dir.path()).unwrap().count()
    }
}
