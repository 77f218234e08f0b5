//! File attachment carried by a message.

use serde::{Deserialize, Serialize};

/// Attached document as announced by the transport; the bytes are fetched on demand through
/// [`crate::core::Bot::download_file`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Transport file id used for download.
    pub file_id: String,
    pub file_name: Option<String>,
    /// MIME type declared by the sender (e.g. `application/pdf`); not sniffed.
    pub mime_type: Option<String>,
    pub file_size: u32,
}

impl Document {
    /// True when the declared MIME type is exactly `application/pdf` (case-insensitive).
    pub fn is_pdf(&self) -> bool {
        self.mime_type
            .as_deref()
            .map(|m| m.trim().eq_ignore_ascii_case("application/pdf"))
            .unwrap_or(false)
    }
}
