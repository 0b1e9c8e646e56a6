//! Authentication infrastructure module
//!
//! Secret hashing and JWT signing used by the token issuer.

mod hasher;
mod jwt;

pub use hasher::{HashScheme, SaltedHasher, SecretHasher};
pub use jwt::{JwtTokenSigner, TokenSigner};

#[cfg(test)]
pub use hasher::MockSecretHasher;
#[cfg(test)]
pub use jwt::MockTokenSigner;
