//! PDF upload: download, extract, remember.

use async_trait::async_trait;
use pdf_reader::{join_pages, PdfExtractor};
use std::path::PathBuf;
use std::sync::Arc;
use study_memory::KnowledgeStore;
use telegram_bot::{Bot, Document, Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument, warn};

use crate::commands::StudyEvent;
use crate::error::StudyError;

pub const MSG_NOT_A_PDF: &str = "⚠️ Strictly PDFs only.";
pub const MSG_PROCESSING: &str = "⚙️ Processing & Saving to Brain...";
pub const MSG_SAVED: &str = "✅ Saved. I will remember this file forever.\nType /quiz to start.";
/// Prefix of the status edit when ingestion fails; the error text follows.
pub const MSG_UPLOAD_FAILED: &str = "❌ Failure:";

/// Replaces the user's notes with the text of an uploaded PDF.
///
/// The upload lives in a temporary file under `download_dir` that is removed when ingestion ends,
/// whatever the outcome.
pub struct DocumentHandler {
    bot: Arc<dyn Bot>,
    pdf: Arc<dyn PdfExtractor>,
    knowledge: KnowledgeStore,
    download_dir: PathBuf,
}

impl DocumentHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        pdf: Arc<dyn PdfExtractor>,
        knowledge: KnowledgeStore,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bot,
            pdf,
            knowledge,
            download_dir: download_dir.into(),
        }
    }

    /// Downloads, extracts and stores. Returns the number of chars stored.
    async fn ingest(&self, user_id: i64, doc: &Document) -> std::result::Result<usize, StudyError> {
        tokio::fs::create_dir_all(&self.download_dir).await?;
        let upload = tempfile::Builder::new()
            .prefix(&format!("upload_{}_", user_id))
            .suffix(".pdf")
            .tempfile_in(&self.download_dir)?;

        let bytes = self.bot.download_file(&doc.file_id, upload.path()).await?;
        info!(user_id, bytes, path = %upload.path().display(), "PDF downloaded");

        let pages = self.pdf.extract_pages(upload.path()).await?;
        let text = join_pages(&pages);
        let chars = text.chars().count();
        info!(user_id, pages = pages.len(), chars, "PDF text extracted");

        self.knowledge.put_context(user_id, text).await;
        Ok(chars)
    }
}

#[async_trait]
impl Handler for DocumentHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let StudyEvent::Document(doc) = StudyEvent::classify(message) else {
            return Ok(HandlerResponse::Continue);
        };

        if !doc.is_pdf() {
            let rejected = StudyError::UnsupportedFileType(
                doc.mime_type.clone().unwrap_or_else(|| "unknown".to_string()),
            );
            warn!(user_id = message.user.id, error = %rejected, "Upload rejected");
            self.bot.reply_to(message, MSG_NOT_A_PDF).await?;
            return Ok(HandlerResponse::Reply(MSG_NOT_A_PDF.to_string()));
        }

        let status_id = self
            .bot
            .send_message_and_return_id(&message.chat, MSG_PROCESSING)
            .await?;

        let final_text = match self.ingest(message.user.id, &doc).await {
            Ok(_) => MSG_SAVED.to_string(),
            Err(e) => {
                error!(error = %e, user_id = message.user.id, file_id = %doc.file_id, "PDF ingestion failed");
                format!("{} {}", MSG_UPLOAD_FAILED, e)
            }
        };

        self.bot
            .edit_message(&message.chat, &status_id, &final_text)
            .await?;
        Ok(HandlerResponse::Reply(final_text))
    }
}
