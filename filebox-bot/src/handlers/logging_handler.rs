//! Logs each inbound message in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_type = %message.message_type,
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(text) => debug!(
                message_id = %message.id,
                reply = %text,
                "Processed message"
            ),
            other => debug!(message_id = %message.id, response = ?other, "Processed message"),
        }
        Ok(())
    }
}
