//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use crate::chain::HandlerChain;
use crate::core::{Message as CoreMessage, ToCoreMessage};
use anyhow::Result;
use teloxide::prelude::*;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Starts the REPL with the given teloxide Bot and HandlerChain.
/// Logs the bot identity first; each message is converted to core::Message and handled by the chain in a spawned task.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Bot connected"),
        Err(e) => warn!(error = %e, "get_me failed; starting anyway"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            dispatch(chain, TelegramMessageWrapper(&msg).to_core());
            respond(())
        }
    })
    .await;

    Ok(())
}

/// Runs the chain for one update in its own task so the REPL returns immediately.
/// Request logging belongs to the chain's handlers; this only traces the hand-off.
fn dispatch(chain: HandlerChain, core_msg: CoreMessage) -> JoinHandle<()> {
    debug!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_id = %core_msg.id,
        "Dispatching update to handler chain"
    );

    tokio::spawn(async move {
        if let Err(e) = chain.handle(&core_msg).await {
            error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Chat, Handler, HandlerResponse, MessageDirection, User};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct ReceivedLogger;

    #[async_trait::async_trait]
    impl Handler for ReceivedLogger {
        async fn before(&self, message: &CoreMessage) -> crate::core::Result<bool> {
            info!(user_id = message.user.id, "Received message");
            Ok(true)
        }

        async fn handle(&self, _message: &CoreMessage) -> crate::core::Result<HandlerResponse> {
            Ok(HandlerResponse::Stop)
        }
    }

    fn message() -> CoreMessage {
        CoreMessage {
            id: "1".to_string(),
            user: User {
                id: 9,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 9,
                chat_type: "private".to_string(),
            },
            content: "hello".to_string(),
            message_type: "text".to_string(),
            direction: MessageDirection::Incoming,
            created_at: chrono::Utc::now(),
            reply_to_message_id: None,
            document: None,
        }
    }

    /// **Test: at info level an update is announced once, by the chain's handler, not by the runner.**
    #[tokio::test]
    async fn test_dispatch_logs_received_message_once() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let chain = HandlerChain::new().add_handler(Arc::new(ReceivedLogger));
        dispatch(chain, message()).await.unwrap();

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("Received message").count(), 1);
        assert!(!output.contains("Dispatching update"));
    }
}
