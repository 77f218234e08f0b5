//! # study-bot
//!
//! Telegram study assistant. Users upload PDF notes; the bot remembers the text per user and
//! asks exam-style questions (`/quiz`, `/quiz random`, `/quiz <topic>`), then grades answers or
//! reveals them in free chat.

pub mod assembly;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;

pub use assembly::{build_handler_chain, build_llm_client, run_bot, StudyBot, StudyComponents};
pub use cli::{list_models, Cli, Commands};
pub use commands::StudyEvent;
pub use config::StudyConfig;
pub use error::StudyError;
