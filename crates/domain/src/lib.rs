//! Domain layer for Traduzap
//!
//! Contains the core message model, routing rules, and translation output
//! formats. This layer has no external service dependencies and defines the
//! ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
