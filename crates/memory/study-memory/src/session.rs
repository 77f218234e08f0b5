//! Session store: last quiz question per user, memory only.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Returned by [`SessionStore::get_last_question`] when no question was asked yet.
pub const NO_ACTIVE_QUESTION: &str = "No active question.";

/// Last generated question per user. Lost on restart.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    questions: Arc<RwLock<HashMap<i64, String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_last_question(&self, user_id: i64, question: impl Into<String>) {
        let question = question.into();
        debug!(user_id, len = question.len(), "last question updated");
        self.questions.write().await.insert(user_id, question);
    }

    /// The last question asked to the user, or [`NO_ACTIVE_QUESTION`].
    pub async fn get_last_question(&self, user_id: i64) -> String {
        self.questions
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| NO_ACTIVE_QUESTION.to_string())
    }
}
