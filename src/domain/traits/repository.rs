use async_trait::async_trait;
use crate::domain::entities::Person;
use crate::domain::errors::RepositoryError;

/// PersonRepository trait - abstraction for person persistence
///
/// Implementations must report a missing record as
/// [`RepositoryError::NotFound`] and every other store failure as
/// [`RepositoryError::Persistence`].
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Fetch the person stored under `id`
    async fn get_by_id(&self, id: &str) -> Result<Person, RepositoryError>;

    /// Insert or replace the record keyed by `person.id()`, atomically
    async fn save(&self, person: &Person) -> Result<(), RepositoryError>;
}
