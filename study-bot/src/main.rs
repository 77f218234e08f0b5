//! study-bot CLI: run the Telegram bot or list available models. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use llm_client::EnvLlmConfig;
use study_bot::{list_models, run_bot, Cli, Commands, StudyConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = StudyConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Models => {
            let llm = EnvLlmConfig::from_env()?;
            println!("🔍 Scanning for available models...");
            for model in list_models(&llm).await? {
                println!("✅ Found: {}", model);
            }
            Ok(())
        }
    }
}
