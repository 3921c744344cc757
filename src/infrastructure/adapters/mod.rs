//! Outbound message senders
//!
//! Each adapter implements [`MessageSender`](crate::domain::traits::MessageSender);
//! the composition root picks one from configuration.

pub mod console;
pub mod log;

pub use console::ConsoleSender;
pub use log::LogSender;
