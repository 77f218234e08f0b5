//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the text that was sent so later handlers
/// can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Not mine; pass to the next handler.
    Continue,
    /// Stop the chain without a reply.
    Stop,
    /// Stop the chain; the handler replied with this text.
    Reply(String),
}

impl HandlerResponse {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerResponse::Continue => "Continue",
            HandlerResponse::Stop => "Stop",
            HandlerResponse::Reply(_) => "Reply",
        }
    }

    /// True when the chain should stop after this response.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, HandlerResponse::Continue)
    }
}
