//! Token Issuer
//!
//! Issues short-lived HS256 tokens to callers presenting a registered API key
//! and the secret matching its stored Argon2 or bcrypt hash:
//! - Read-only key registry loaded once from a JSON document
//! - Structured events for every issuance decision
//! - HTTP endpoint and CLI helpers around the core

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::KeyRegistry;
use infrastructure::issuer::TokenIssuer;
use infrastructure::registry::JsonFileSource;

/// Load the key registry named by the configuration.
///
/// An unreadable or malformed document yields an empty registry rather than
/// an error; see [`KeyRegistry::load`].
pub async fn load_registry(config: &AppConfig) -> KeyRegistry {
    let source = JsonFileSource::new(&config.registry.path);
    KeyRegistry::load(&source).await
}

/// Build the application state from configuration
pub async fn create_app_state(config: &AppConfig) -> AppState {
    let registry = load_registry(config).await;
    AppState::new(TokenIssuer::new(Arc::new(registry)))
}
