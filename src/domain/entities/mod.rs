//! Domain entities - Core business objects with no external dependencies

pub mod person;
pub mod role;

pub use person::{Person, MIN_NAME_LEN};
pub use role::Role;
