//! Domain layer - Core business logic and entities

pub mod api_key;
pub mod error;
pub mod token;

pub use api_key::{ApiKeyRecord, KeyRegistry, RegistrySource, RegistryStatus, TokenType};
pub use error::DomainError;
pub use token::{IssuanceEvent, IssuedToken, Payload, TokenClaims, TOKEN_TTL_MINUTES};
