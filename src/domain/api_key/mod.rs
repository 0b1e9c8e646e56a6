//! API key domain
//!
//! Registered keys, the read-only registry holding them, and the trait for the
//! source the registry is loaded from.

mod entity;
mod registry;
mod source;

pub use entity::{ApiKeyRecord, TokenType};
pub use registry::{KeyRegistry, RegistryStatus};
pub use source::RegistrySource;

#[cfg(test)]
pub use source::MockRegistrySource;
