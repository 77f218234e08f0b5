//! StudyConfig: [`BaseConfig`] (Telegram + log) + LLM settings + storage directories.

use anyhow::{Context, Result};
use llm_client::EnvLlmConfig;
use std::env;
use std::path::PathBuf;
use telegram_bot::BaseConfig;

/// Knowledge directory used when `KNOWLEDGE_BASE_DIR` is unset.
pub const DEFAULT_KNOWLEDGE_BASE_DIR: &str = "knowledge_base";

/// Full application config. Use [`StudyConfig::load`] for env-based loading.
#[derive(Debug, Clone)]
pub struct StudyConfig {
    pub base: BaseConfig,
    pub llm: EnvLlmConfig,
    /// KNOWLEDGE_BASE_DIR; one `<user_id>.txt` per user.
    pub knowledge_base_dir: PathBuf,
    /// DOWNLOAD_DIR; scratch space for uploaded PDFs (system temp dir by default).
    pub download_dir: PathBuf,
}

impl StudyConfig {
    /// Load from environment variables. If `token` is provided it overrides TELEGRAM_TOKEN / BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token).context("Load Telegram config")?;
        let llm = EnvLlmConfig::from_env().context("Load LLM config")?;
        Ok(Self {
            base,
            llm,
            knowledge_base_dir: knowledge_base_dir_from_env(),
            download_dir: download_dir_from_env(),
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if self.llm.api_key.trim().is_empty() {
            anyhow::bail!("GEMINI_API_KEY (or OPENAI_API_KEY) is empty");
        }
        if self.download_dir.exists() && !self.download_dir.is_dir() {
            anyhow::bail!(
                "DOWNLOAD_DIR is not a directory: {}",
                self.download_dir.display()
            );
        }
        Ok(())
    }
}

fn knowledge_base_dir_from_env() -> PathBuf {
    env::var("KNOWLEDGE_BASE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_KNOWLEDGE_BASE_DIR))
}

fn download_dir_from_env() -> PathBuf {
    env::var("DOWNLOAD_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir())
}
