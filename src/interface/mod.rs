//! Interface layer - Entry points that drive the application services
//!
//! Adapters here may only call into `application` (and read `domain` types);
//! concrete infrastructure is wired in by `main`.

pub mod cli;
