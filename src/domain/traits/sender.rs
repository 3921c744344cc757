use async_trait::async_trait;
use crate::domain::errors::SendError;

/// MessageSender trait - abstraction for outbound messaging integrations
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver `message` to `recipient`
    async fn send_message(&self, recipient: &str, message: &str) -> Result<(), SendError>;

    /// Short name used in logs
    fn name(&self) -> &str;
}
