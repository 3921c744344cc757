//! Test doubles for the domain traits

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::Person;
use crate::domain::errors::{RepositoryError, SendError};
use crate::domain::traits::{MessageSender, PersonRepository};

/// HashMap-backed repository that counts saves and can be told to fail them
#[derive(Default)]
pub struct FakeRepository {
    people: Mutex<HashMap<String, Person>>,
    saves: Mutex<usize>,
    save_failure: Mutex<Option<String>>,
}

impl FakeRepository {
    pub fn len(&self) -> usize {
        self.people.lock().unwrap().len()
    }

    pub fn save_calls(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    pub fn fail_saves(&self, reason: &str) {
        *self.save_failure.lock().unwrap() = Some(reason.to_string());
    }
}

#[async_trait]
impl PersonRepository for FakeRepository {
    async fn get_by_id(&self, id: &str) -> Result<Person, RepositoryError> {
        self.people
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn save(&self, person: &Person) -> Result<(), RepositoryError> {
        *self.saves.lock().unwrap() += 1;
        if let Some(reason) = self.save_failure.lock().unwrap().clone() {
            return Err(RepositoryError::Persistence(reason));
        }
        self.people
            .lock()
            .unwrap()
            .insert(person.id().to_string(), person.clone());
        Ok(())
    }
}

/// Sender that records every delivery
#[derive(Default)]
pub struct FakeSender {
    sent: Mutex<Vec<(String, String)>>,
    failure: Mutex<Option<String>>,
}

impl FakeSender {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock().unwrap() = Some(reason.to_string());
    }
}

#[async_trait]
impl MessageSender for FakeSender {
    async fn send_message(&self, recipient: &str, message: &str) -> Result<(), SendError> {
        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(SendError::Delivery {
                recipient: recipient.to_string(),
                reason,
            });
        }
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_string(), message.to_string()));
        Ok(())
    }

    fn name(&self) -> &str {
        "fake"
    }
}
