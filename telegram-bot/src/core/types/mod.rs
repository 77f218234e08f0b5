//! Core types: user, chat, document, message, handler response, and the Handler trait.
//!
//! One file per main type.

mod chat;
mod document;
mod handler;
mod message;
mod response;
mod user;

pub use chat::Chat;
pub use document::Document;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::{Message, MessageDirection};
pub use response::HandlerResponse;
pub use user::User;
