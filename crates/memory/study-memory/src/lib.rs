//! # study-memory
//!
//! Per-user state for the study bot:
//!
//! - [`KnowledgeStore`]: the text of the user's last uploaded PDF. In-memory map over one
//!   `<user_id>.txt` file per user ([`FileKnowledgePersistence`]); write-through, read-through.
//! - [`SessionStore`]: the last quiz question asked to each user. Memory only.
//!
//! Both stores are plain state objects; the bot assembly owns them and shares them with handlers.

mod knowledge;
mod session;

pub use knowledge::{FileKnowledgePersistence, KnowledgePersistence, KnowledgeStore};
pub use session::{SessionStore, NO_ACTIVE_QUESTION};
