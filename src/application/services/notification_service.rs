use std::sync::Arc;

use crate::application::errors::{require, ServiceError};
use crate::domain::traits::{MessageSender, PersonRepository};

/// Service for sending messages to stored people
///
/// The sender is picked by the composition root; this service only knows
/// the [`MessageSender`] contract.
pub struct NotificationService {
    repository: Arc<dyn PersonRepository>,
    sender: Arc<dyn MessageSender>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn PersonRepository>, sender: Arc<dyn MessageSender>) -> Self {
        Self { repository, sender }
    }

    pub fn sender(&self) -> &dyn MessageSender {
        self.sender.as_ref()
    }

    /// Send `message` to the email address of the person stored under `id`
    pub async fn notify_person(&self, id: &str, message: &str) -> Result<(), ServiceError> {
        require("id", id)?;
        require("message", message)?;

        let person = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| ServiceError::from_lookup(id, e))?;

        self.sender.send_message(person.email(), message).await?;
        tracing::info!("Notified person {} via {}", id, self.sender.name());
        Ok(())
    }
}
