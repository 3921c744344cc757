//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Database: SQLite person repository
//! - Storage: In-memory person repository
//! - Adapters: Outbound message senders (console, log)

pub mod adapters;
pub mod config;
pub mod database;
pub mod storage;
