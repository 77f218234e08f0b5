//! Core types and traits: Message, Bot, Handler, HandlerResponse, error, logger.
//! Transport-agnostic; the teloxide side lives in [`crate::telegram`].

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Document, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage,
    ToCoreUser, User,
};
