//! Application services - Business logic orchestration

pub mod notification_service;
pub mod person_service;

pub use notification_service::NotificationService;
pub use person_service::{NewPerson, PersonService};

#[cfg(test)]
pub(crate) mod testing;
