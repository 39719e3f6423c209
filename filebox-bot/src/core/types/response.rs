//! Handler chain result type.

/// What a handler did with the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Not handled here; pass to the next handler.
    Continue,
    /// Handled; the reply (if any) was not plain text (media, keyboard, Markdown list).
    Stop,
    /// Handled with a plain-text reply; carries the text so `after()` hooks can log it.
    Reply(String),
}
