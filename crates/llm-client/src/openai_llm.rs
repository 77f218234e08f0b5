//! OpenAI-compatible [`LlmClient`]: wraps openai-client, optionally prepends a system message.

use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, FinishReason,
};
use tracing::{info, instrument, warn};

use super::{GenerationError, LlmClient, DEFAULT_MODEL};

/// LlmClient backed by openai-client; one user message per call.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
    system_prompt: Option<String>,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    fn build_messages(&self, prompt: &str) -> Result<Vec<ChatCompletionRequestMessage>, GenerationError> {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::with_capacity(2);
        if let Some(ref system) = self.system_prompt {
            messages.push(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system.clone())
                    .build()?
                    .into(),
            );
        }
        messages.push(
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt.to_string())
                .build()?
                .into(),
        );
        Ok(messages)
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let messages = self.build_messages(prompt)?;
        let completion = self.client.chat_completion(&self.model, messages).await?;

        if completion.finish_reason == Some(FinishReason::ContentFilter) {
            warn!("generation stopped by content filter");
            return Err(GenerationError::ContentPolicy(
                "the model refused to answer this prompt".to_string(),
            ));
        }

        match completion.content {
            Some(text) if !text.trim().is_empty() => {
                info!(response_len = text.len(), "generation finished");
                Ok(text)
            }
            _ => Err(GenerationError::EmptyResponse),
        }
    }
}
