//! Bot configuration: Telegram connection and logging. Loaded from env.
//!
//! Application settings (LLM, storage directories) live with the application and wrap [`BaseConfig`].

mod base;


pub use base::{BaseConfig, DEFAULT_LOG_FILE};
