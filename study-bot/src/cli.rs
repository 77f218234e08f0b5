//! CLI parser and the `models` command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use llm_client::LlmConfig;
use openai_client::{mask_token, OpenAIClient};
use tracing::info;

#[derive(Parser)]
#[command(name = "study-bot")]
#[command(about = "Telegram study assistant: quizzes you on your PDF notes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override TELEGRAM_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// List models available to the configured API key.
    Models,
}

/// Model ids visible to the configured key, sorted.
pub async fn list_models(llm: &dyn LlmConfig) -> Result<Vec<String>> {
    info!(
        base_url = %llm.base_url(),
        api_key = %mask_token(llm.api_key()),
        "Listing models"
    );
    let client = OpenAIClient::with_base_url(llm.api_key().to_string(), llm.base_url().to_string());
    let mut models = client
        .list_models()
        .await
        .with_context(|| format!("List models at {}", llm.base_url()))?;
    models.sort();
    Ok(models)
}
