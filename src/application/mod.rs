//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Use-case orchestration over the domain traits
//! - Errors: Use-case level failures, stable for the interface layer

pub mod errors;
pub mod services;
