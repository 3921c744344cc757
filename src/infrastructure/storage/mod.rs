//! In-memory person repository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Person;
use crate::domain::errors::RepositoryError;
use crate::domain::traits::PersonRepository;

/// Process-local store, lost on exit
#[derive(Default, Clone)]
pub struct InMemoryPersonRepository {
    people: Arc<RwLock<HashMap<String, Person>>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.people.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.people.read().await.is_empty()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn get_by_id(&self, id: &str) -> Result<Person, RepositoryError> {
        let people = self.people.read().await;
        people
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn save(&self, person: &Person) -> Result<(), RepositoryError> {
        let mut people = self.people.write().await;
        people.insert(person.id().to_string(), person.clone());
        Ok(())
    }
}
