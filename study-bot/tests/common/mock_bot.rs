//! Recording [`telegram_bot::Bot`] for handler tests.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use telegram_bot::{Bot, Chat, Message, Result};

/// Records every outgoing call. Downloads write `file_bytes` to the destination.
pub struct MockBot {
    pub sent: Mutex<Vec<String>>,
    pub edits: Mutex<Vec<(String, String)>>,
    pub typing: Mutex<usize>,
    pub downloads: Mutex<Vec<String>>,
    pub file_bytes: Vec<u8>,
    next_id: Mutex<u64>,
}

impl MockBot {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            edits: Mutex::new(Vec::new()),
            typing: Mutex::new(0),
            downloads: Mutex::new(Vec::new()),
            file_bytes: b"%PDF-1.4 test".to_vec(),
            next_id: Mutex::new(500),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_sent(&self) -> Option<String> {
        self.sent.lock().unwrap().last().cloned()
    }

    pub fn edits(&self) -> Vec<(String, String)> {
        self.edits.lock().unwrap().clone()
    }

    pub fn typing_count(&self) -> usize {
        *self.typing.lock().unwrap()
    }

    pub fn download_count(&self) -> usize {
        self.downloads.lock().unwrap().len()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_message_and_return_id(&self, _chat: &Chat, text: &str) -> Result<String> {
        self.sent.lock().unwrap().push(text.to_string());
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        Ok(id.to_string())
    }

    async fn edit_message(&self, _chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        self.edits
            .lock()
            .unwrap()
            .push((message_id.to_string(), text.to_string()));
        Ok(())
    }

    async fn send_typing(&self, _chat: &Chat) -> Result<()> {
        *self.typing.lock().unwrap() += 1;
        Ok(())
    }

    async fn download_file(&self, file_id: &str, dest: &Path) -> Result<u64> {
        self.downloads.lock().unwrap().push(file_id.to_string());
        tokio::fs::write(dest, &self.file_bytes).await?;
        Ok(self.file_bytes.len() as u64)
    }
}
