//! Application error type.

use llm_client::GenerationError;
use pdf_reader::ExtractionError;
use telegram_bot::BotError;
use thiserror::Error;

/// Errors raised while handling a study command.
#[derive(Error, Debug)]
pub enum StudyError {
    /// Attachment is not a PDF; carries the declared MIME type (or `unknown`).
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// No (or blank) notes stored for the user.
    #[error("no notes stored for this user")]
    EmptyKnowledge,

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Bot(#[from] BotError),

    #[error("temporary file: {0}")]
    TempFile(#[from] std::io::Error),
}
