//! Token domain
//!
//! Issued tokens, their claims, and the events emitted while issuing them.

mod claims;
mod event;

pub use claims::{
    IssuedToken, Payload, TokenClaims, EXPIRATION_CLAIM, ISSUED_AT_CLAIM, TOKEN_TTL_MINUTES,
};
pub use event::IssuanceEvent;
