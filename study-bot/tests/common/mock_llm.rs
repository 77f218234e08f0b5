//! Canned [`llm_client::LlmClient`] that records prompts.

use std::sync::Mutex;

use async_trait::async_trait;
use llm_client::{GenerationError, LlmClient};

pub struct MockLlm {
    pub prompts: Mutex<Vec<String>>,
    reply: Result<String, GenerationError>,
}

impl MockLlm {
    pub fn replying(text: &str) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            reply: Ok(text.to_string()),
        }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            reply: Err(error),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}
