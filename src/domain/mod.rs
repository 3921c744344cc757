//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (Person, Role)
//! - Traits: Abstractions for infrastructure (PersonRepository, MessageSender)
//! - Errors: Rule violations and the failure kinds adapters must report
//!
//! Nothing in here may name a storage, transport or serialization crate.

pub mod entities;
pub mod errors;
pub mod traits;
