//! Domain traits - Abstractions for infrastructure implementations

pub mod repository;
pub mod sender;

pub use repository::PersonRepository;
pub use sender::MessageSender;
