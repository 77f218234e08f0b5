//! # Telegram bot framework
//!
//! Transport-agnostic core (Message, Bot, Handler), the [`HandlerChain`], the teloxide transport
//! (adapters, [`TelegramBotAdapter`], [`run_repl`]), base config and logging.

pub mod chain;
pub mod config;
pub mod core;
pub mod telegram;

pub use core::{
    init_tracing, Bot, BotError, Chat, Document, Handler, HandlerResponse, Message,
    MessageDirection, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    build_teloxide_bot, document_to_core, run_repl, TelegramBotAdapter, TelegramMessageWrapper,
    TelegramUserWrapper,
};

pub use config::{BaseConfig, DEFAULT_LOG_FILE};
