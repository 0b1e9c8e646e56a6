//! Secret hashing utilities
//!
//! New hashes are Argon2id PHC strings by default. Verification also accepts
//! bcrypt hashes (`$2a$`, `$2b$`, `$2y$`) so registries provisioned with bcrypt
//! keep working.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash,
        PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Trait for the salted-hash scheme shared with whoever provisions the registry
#[cfg_attr(test, automock)]
pub trait SecretHasher: Send + Sync {
    /// Hash a secret into a self-describing hash string
    fn hash(&self, secret: &str) -> Result<String, DomainError>;

    /// Verify a secret against a stored hash.
    ///
    /// `Ok(false)` means the secret does not match. `Err` means the comparison
    /// could not be carried out (e.g. the stored hash is malformed).
    fn verify(&self, secret: &str, hash: &str) -> Result<bool, DomainError>;
}

/// Scheme used when producing new hashes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashScheme {
    #[default]
    Argon2,
    Bcrypt,
}

/// Hasher producing Argon2 or bcrypt hashes and verifying either
#[derive(Debug, Clone, Default)]
pub struct SaltedHasher {
    scheme: HashScheme,
}

impl SaltedHasher {
    /// Create a hasher producing Argon2id hashes
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce hashes with the given scheme
    pub fn with_scheme(mut self, scheme: HashScheme) -> Self {
        self.scheme = scheme;
        self
    }

    fn is_bcrypt(hash: &str) -> bool {
        BCRYPT_PREFIXES.iter().any(|prefix| hash.starts_with(prefix))
    }

    fn verify_argon2(secret: &str, hash: &str) -> Result<bool, DomainError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| DomainError::hashing(format!("Malformed secret hash: {}", e)))?;

        match Argon2::default().verify_password(secret.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(DomainError::hashing(format!(
                "Failed to verify secret: {}",
                e
            ))),
        }
    }
}

impl SecretHasher for SaltedHasher {
    fn hash(&self, secret: &str) -> Result<String, DomainError> {
        match self.scheme {
            HashScheme::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);

                Argon2::default()
                    .hash_password(secret.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| DomainError::hashing(format!("Failed to hash secret: {}", e)))
            }
            HashScheme::Bcrypt => bcrypt::hash(secret, bcrypt::DEFAULT_COST)
                .map_err(|e| DomainError::hashing(format!("Failed to hash secret: {}", e))),
        }
    }

    fn verify(&self, secret: &str, hash: &str) -> Result<bool, DomainError> {
        if Self::is_bcrypt(hash) {
            return bcrypt::verify(secret, hash)
                .map_err(|e| DomainError::hashing(format!("Failed to verify secret: {}", e)));
        }

        Self::verify_argon2(secret, hash)
    }
}
