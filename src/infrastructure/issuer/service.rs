//! Token issuer service
//!
//! Validates an `(apikey, secret)` pair against the key registry and signs the
//! caller payload on success.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainError, IssuanceEvent, IssuedToken, KeyRegistry, Payload};
use crate::infrastructure::auth::{SaltedHasher, JwtTokenSigner, SecretHasher, TokenSigner};

use super::observer::{IssuanceObserver, TracingObserver};

/// Issues signed tokens for registered API keys
#[derive(Clone)]
pub struct TokenIssuer {
    registry: Arc<KeyRegistry>,
    hasher: Arc<dyn SecretHasher>,
    signer: Arc<dyn TokenSigner>,
    observer: Arc<dyn IssuanceObserver>,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("registry_size", &self.registry.len())
            .field("registry_status", self.registry.status())
            .finish()
    }
}

impl TokenIssuer {
    /// Create an issuer with salted-hash verification, HS256 signing and tracing events
    pub fn new(registry: Arc<KeyRegistry>) -> Self {
        Self {
            registry,
            hasher: Arc::new(SaltedHasher::new()),
            signer: Arc::new(JwtTokenSigner::new()),
            observer: Arc::new(TracingObserver::new()),
        }
    }

    /// Replace the secret hasher
    pub fn with_hasher(mut self, hasher: Arc<dyn SecretHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Replace the token signer
    pub fn with_signer(mut self, signer: Arc<dyn TokenSigner>) -> Self {
        self.signer = signer;
        self
    }

    /// Replace the event observer
    pub fn with_observer(mut self, observer: Arc<dyn IssuanceObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    /// Issue a token for `payload` if `secret` matches the stored hash of `apikey`.
    ///
    /// Returns `Ok(None)` when the request is refused: unknown key, missing
    /// hash, failed hash comparison or wrong secret. Each refusal is reported
    /// to the observer and never surfaces as an error. `Err` is reserved for
    /// signing failures after a successful check, which are recorded as
    /// `signing_failed` before being returned.
    pub async fn generate(
        &self,
        apikey: &str,
        secret: &str,
        payload: &Payload,
    ) -> Result<Option<IssuedToken>, DomainError> {
        let Some(record) = self.registry.lookup(apikey) else {
            if !self.registry.is_available() {
                debug!(apikey, "Key registry unavailable, every key is unknown");
            }
            self.observer.record(&IssuanceEvent::unknown_apikey(apikey));
            return Ok(None);
        };

        let Some(secret_hash) = record.secret_hash() else {
            self.observer.record(&IssuanceEvent::missing_hash(apikey));
            return Ok(None);
        };

        debug!(
            apikey,
            key_id = record.id(),
            key_name = record.name(),
            token_type = %record.token_type().name,
            "Validating secret for API key"
        );

        let is_valid = match self.verify_secret(secret, secret_hash).await {
            Ok(valid) => valid,
            Err(e) => {
                self.observer
                    .record(&IssuanceEvent::hash_compare_error(apikey, e.to_string()));
                false
            }
        };

        debug!(apikey, valid = is_valid, "Secret validation result");

        if !is_valid {
            self.observer.record(&IssuanceEvent::issuance_failed(apikey));
            return Ok(None);
        }

        let token = match self.signer.sign(payload, secret) {
            Ok(token) => token,
            Err(e) => {
                self.observer
                    .record(&IssuanceEvent::signing_failed(apikey, e.to_string()));
                return Err(e);
            }
        };
        self.observer.record(&IssuanceEvent::token_issued(apikey));

        Ok(Some(token))
    }

    /// Run the hash comparison on the blocking pool
    async fn verify_secret(&self, secret: &str, secret_hash: &str) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        let secret = secret.to_string();
        let secret_hash = secret_hash.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&secret, &secret_hash))
            .await
            .map_err(|e| DomainError::internal(format!("Secret verification task failed: {}", e)))?
    }
}
