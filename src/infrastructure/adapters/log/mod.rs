//! Log sender - records outbound messages as tracing events

use async_trait::async_trait;
use crate::domain::errors::SendError;
use crate::domain::traits::MessageSender;

#[derive(Debug, Default, Clone, Copy)]
pub struct LogSender;

impl LogSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageSender for LogSender {
    async fn send_message(&self, recipient: &str, message: &str) -> Result<(), SendError> {
        tracing::info!(recipient, message, "Outbound message");
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
