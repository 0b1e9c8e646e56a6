//! Infrastructure layer - External service implementations

pub mod auth;
pub mod issuer;
pub mod logging;
pub mod registry;
