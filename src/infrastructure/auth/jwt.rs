//! JWT token signing and verification keyed by the caller's secret
//!
//! Tokens are HS256-signed with the secret presented by the caller, not with a
//! server-held key. Anyone who knows a key's secret can therefore verify, and
//! also mint, tokens for it without going through this service.

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

#[cfg(test)]
use mockall::automock;

use crate::domain::token::{EXPIRATION_CLAIM, ISSUED_AT_CLAIM};
use crate::domain::{DomainError, IssuedToken, Payload, TokenClaims};

/// Trait for token signing
#[cfg_attr(test, automock)]
pub trait TokenSigner: Send + Sync {
    /// Sign `payload` with `secret`, adding issued-at and expiration claims
    fn sign(&self, payload: &Payload, secret: &str) -> Result<IssuedToken, DomainError>;
}

/// HS256 JWT signer
#[derive(Debug, Clone)]
pub struct JwtTokenSigner {
    algorithm: Algorithm,
}

impl JwtTokenSigner {
    /// Create a new signer using HS256
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign with an explicit issue time.
    ///
    /// A numeric `iat` in the payload takes precedence over `issued_at` and the
    /// expiration is counted from it. A payload `exp` is rejected.
    pub fn sign_at(
        &self,
        payload: &Payload,
        secret: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, DomainError> {
        if payload.contains_key(EXPIRATION_CLAIM) {
            return Err(DomainError::validation(format!(
                "Payload must not contain reserved claim '{}'",
                EXPIRATION_CLAIM
            )));
        }

        let mut body = payload.clone();
        let issued_at = match body.remove(ISSUED_AT_CLAIM) {
            Some(value) => value
                .as_i64()
                .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
                .ok_or_else(|| {
                    DomainError::validation(format!(
                        "Payload claim '{}' must be a number of seconds",
                        ISSUED_AT_CLAIM
                    ))
                })?,
            None => issued_at,
        };

        let claims = TokenClaims::new(body, issued_at);
        let expires_at = timestamp_to_datetime(claims.exp)?;
        let issued_at = timestamp_to_datetime(claims.iat)?;

        let token = encode(
            &Header::new(self.algorithm),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| DomainError::signing(format!("Failed to sign token: {}", e)))?;

        Ok(IssuedToken {
            token,
            issued_at,
            expires_at,
        })
    }

    /// Validate a token's signature and expiration and return its claims
    pub fn verify(&self, token: &str, secret: &str) -> Result<TokenClaims, DomainError> {
        let validation = Validation::new(self.algorithm);

        let token_data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map_err(|e| DomainError::validation(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }
}

impl Default for JwtTokenSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSigner for JwtTokenSigner {
    fn sign(&self, payload: &Payload, secret: &str) -> Result<IssuedToken, DomainError> {
        self.sign_at(payload, secret, Utc::now())
    }
}

fn timestamp_to_datetime(secs: i64) -> Result<DateTime<Utc>, DomainError> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| DomainError::internal(format!("Timestamp out of range: {}", secs)))
}
