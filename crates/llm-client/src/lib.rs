//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait (prompt in, text out) and an OpenAI-compatible
//! implementation. Transport-agnostic; used by the study-bot quiz and chat handlers.
//!
//! Failures are reported as [`GenerationError`]; nothing here retries.

use async_trait::async_trait;
use openai_client::OpenAIError;
use thiserror::Error;

mod config;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use openai_llm::OpenAILlmClient;

/// Why a generation call failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("quota exceeded: {0}")]
    Quota(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("rejected by content policy: {0}")]
    ContentPolicy(String),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("API error: {0}")]
    Api(String),

    #[error("request error: {0}")]
    Request(String),
}

impl From<OpenAIError> for GenerationError {
    fn from(e: OpenAIError) -> Self {
        match e {
            OpenAIError::ApiError(api) => {
                let kind = api.r#type.clone().unwrap_or_default().to_lowercase();
                let message = api.message.to_lowercase();
                let mentions = |needle: &str| kind.contains(needle) || message.contains(needle);
                if mentions("quota") || mentions("rate limit") || mentions("resource_exhausted") {
                    GenerationError::Quota(api.message)
                } else if mentions("safety") || mentions("content_policy") || mentions("content_filter")
                {
                    GenerationError::ContentPolicy(api.message)
                } else {
                    GenerationError::Api(api.message)
                }
            }
            OpenAIError::Reqwest(e) => GenerationError::Network(e.to_string()),
            other => GenerationError::Request(other.to_string()),
        }
    }
}

/// LLM client interface: send one prompt, get the model's reply text.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply for `prompt`. Implementations may prepend a system prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
