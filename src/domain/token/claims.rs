//! Token body and issued token types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifetime of every issued token
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// Issued-at claim; a caller-supplied value replaces the signing time
pub const ISSUED_AT_CLAIM: &str = "iat";

/// Expiration claim; always computed by the issuer
pub const EXPIRATION_CLAIM: &str = "exp";

/// Caller-supplied token body, passed through verbatim
pub type Payload = Map<String, Value>;

/// Decoded token body: the caller payload plus timing claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(flatten)]
    pub payload: Payload,
    /// Issued at (Unix epoch seconds)
    pub iat: i64,
    /// Expiration (Unix epoch seconds)
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims issued at `issued_at`, expiring [`TOKEN_TTL_MINUTES`] later
    pub fn new(payload: Payload, issued_at: DateTime<Utc>) -> Self {
        let expires_at = issued_at + Duration::minutes(TOKEN_TTL_MINUTES);

        Self {
            payload,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}

/// A signed token handed back to the caller
#[derive(Clone, PartialEq)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedToken")
            .field("token", &"[hidden]")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
