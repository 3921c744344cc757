//! Layered person directory
//!
//! - `domain`: entities, value objects and the traits adapters implement
//! - `application`: use cases over the domain traits
//! - `infrastructure`: concrete stores, senders and configuration
//! - `interface`: the command-line adapter
//!
//! Concrete types are wired together only in the binary's `main`.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
