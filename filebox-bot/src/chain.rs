//! # Handler chain
//!
//! Runs a sequence of handlers. All `before` run in order (any false stops the chain); then
//! `handle` runs until one returns Stop or Reply; then all `after` run in reverse.

use crate::core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        for h in &self.handlers {
            if !h.before(message).await? {
                let name = std::any::type_name_of_val(h.as_ref());
                info!(handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(message).await?;
            debug!(handler = %name, response = ?response, "Handler processed");

            if response != HandlerResponse::Continue {
                final_response = response;
                break;
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        Ok(final_response)
    }
}
