//! Application state for shared services

use std::sync::Arc;

use crate::domain::KeyRegistry;
use crate::infrastructure::issuer::TokenIssuer;

/// Application state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub token_issuer: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(token_issuer: TokenIssuer) -> Self {
        Self {
            token_issuer: Arc::new(token_issuer),
        }
    }

    /// State with a default issuer over the given registry
    pub fn from_registry(registry: KeyRegistry) -> Self {
        Self::new(TokenIssuer::new(Arc::new(registry)))
    }

    pub fn registry(&self) -> &KeyRegistry {
        self.token_issuer.registry()
    }
}
