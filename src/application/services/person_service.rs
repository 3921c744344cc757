use std::sync::Arc;

use crate::application::errors::{require, ServiceError};
use crate::domain::entities::{Person, Role};
use crate::domain::traits::PersonRepository;

/// Input for [`PersonService::create_person`]
///
/// When no ID is supplied the service mints one.
#[derive(Debug, Clone)]
pub struct NewPerson {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Service for person use cases
pub struct PersonService {
    repository: Arc<dyn PersonRepository>,
}

impl PersonService {
    pub fn new(repository: Arc<dyn PersonRepository>) -> Self {
        Self { repository }
    }

    /// Build and persist a new person
    pub async fn create_person(&self, input: NewPerson) -> Result<Person, ServiceError> {
        if let Some(id) = &input.id {
            require("id", id)?;
        }
        require("name", &input.name)?;
        require("email", &input.email)?;

        let id = input
            .id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let person = Person::new(id, &input.name, input.email, input.role)?;

        self.repository
            .save(&person)
            .await
            .map_err(ServiceError::from_save)?;

        tracing::info!("Created person {} ({})", person.id(), person.role());
        Ok(person)
    }

    pub async fn get_person_by_id(&self, id: &str) -> Result<Person, ServiceError> {
        require("id", id)?;
        tracing::debug!("Looking up person {}", id);

        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| ServiceError::from_lookup(id, e))
    }

    /// Rename a stored person; nothing is written if the new name is rejected
    pub async fn update_name(&self, id: &str, new_name: &str) -> Result<Person, ServiceError> {
        require("name", new_name)?;
        let mut person = self.get_person_by_id(id).await?;

        if let Err(e) = person.change_name(new_name) {
            tracing::warn!("Rejected rename of {}: {}", id, e);
            return Err(e.into());
        }

        self.repository
            .save(&person)
            .await
            .map_err(ServiceError::from_save)?;

        tracing::info!("Renamed person {}", id);
        Ok(person)
    }

    pub async fn change_role(&self, id: &str, role: Role) -> Result<Person, ServiceError> {
        let mut person = self.get_person_by_id(id).await?;
        if person.role() == role {
            return Ok(person);
        }

        person.change_role(role);
        self.repository
            .save(&person)
            .await
            .map_err(ServiceError::from_save)?;

        tracing::info!("Changed role of person {} to {}", id, role);
        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::FakeRepository;
    use crate::domain::errors::ValidationError;

    fn service() -> (Arc<FakeRepository>, PersonService) {
        let repo = Arc::new(FakeRepository::default());
        let service = PersonService::new(repo.clone());
        (repo, service)
    }

    fn alice() -> NewPerson {
        NewPerson::new("Alice", "a@x.com", Role::Admin).with_id("1")
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let (_, service) = service();
        service.create_person(alice()).await.unwrap();

        let person = service.get_person_by_id("1").await.unwrap();
        assert_eq!(person.id(), "1");
        assert_eq!(person.name(), "Alice");
        assert_eq!(person.email(), "a@x.com");
        assert_eq!(person.role(), Role::Admin);
    }

    #[tokio::test]
    async fn create_mints_id_when_absent() {
        let (repo, service) = service();
        let person = service
            .create_person(NewPerson::new("Bobby", "b@x.com", Role::User))
            .await
            .unwrap();

        assert!(uuid::Uuid::parse_str(person.id()).is_ok());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn create_with_short_name_persists_nothing() {
        let (repo, service) = service();
        let err = service
            .create_person(NewPerson::new("Al", "a@x.com", Role::Admin).with_id("1"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::NameTooShort { actual: 2, .. })
        ));
        assert_eq!(repo.len(), 0);
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn create_rejects_blank_fields_before_saving() {
        let (repo, service) = service();

        for input in [
            NewPerson::new("Alice", "a@x.com", Role::User).with_id(" "),
            NewPerson::new("   ", "a@x.com", Role::User),
            NewPerson::new("Alice", "", Role::User),
        ] {
            let err = service.create_person(input).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidInput(_)), "{err}");
        }
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn create_surfaces_store_failure_with_context() {
        let (repo, service) = service();
        repo.fail_saves("disk full");

        let err = service.create_person(alice()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Persistence { action: "save person", .. }));
        assert!(err.to_string().contains("disk full"));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (_, service) = service();
        let err = service.get_person_by_id("missing").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing"));
    }

    #[tokio::test]
    async fn update_name_persists_new_name() {
        let (_, service) = service();
        service.create_person(alice()).await.unwrap();

        let updated = service.update_name("1", "Alicia").await.unwrap();
        assert_eq!(updated.name(), "Alicia");
        assert_eq!(service.get_person_by_id("1").await.unwrap().name(), "Alicia");
    }

    #[tokio::test]
    async fn update_name_too_short_keeps_stored_name() {
        let (repo, service) = service();
        service.create_person(alice()).await.unwrap();
        let saves_before = repo.save_calls();

        let err = service.update_name("1", "Al").await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(repo.save_calls(), saves_before);
        assert_eq!(service.get_person_by_id("1").await.unwrap().name(), "Alice");
    }

    #[tokio::test]
    async fn update_name_on_missing_person_is_not_found() {
        let (_, service) = service();
        let err = service.update_name("ghost", "Casper").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn change_role_updates_store() {
        let (_, service) = service();
        service.create_person(alice()).await.unwrap();

        service.change_role("1", Role::User).await.unwrap();
        assert_eq!(service.get_person_by_id("1").await.unwrap().role(), Role::User);
    }

    #[tokio::test]
    async fn change_role_to_same_role_skips_save() {
        let (repo, service) = service();
        service.create_person(alice()).await.unwrap();
        let saves_before = repo.save_calls();

        service.change_role("1", Role::Admin).await.unwrap();
        assert_eq!(repo.save_calls(), saves_before);
    }
}
