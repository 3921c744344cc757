//! Console sender for development/testing

use async_trait::async_trait;
use crate::domain::errors::SendError;
use crate::domain::traits::MessageSender;

/// Prints outbound messages to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSender;

impl ConsoleSender {
    pub fn new() -> Self {
        Self
    }

    fn format_line(recipient: &str, message: &str) -> String {
        format!("[to {}] {}", recipient, message)
    }
}

#[async_trait]
impl MessageSender for ConsoleSender {
    async fn send_message(&self, recipient: &str, message: &str) -> Result<(), SendError> {
        println!("{}", Self::format_line(recipient, message));
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
