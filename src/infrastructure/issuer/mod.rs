//! Token issuance pipeline

mod observer;
mod service;

pub use observer::{IssuanceObserver, TracingObserver};
pub use service::TokenIssuer;

#[cfg(test)]
pub use observer::MockIssuanceObserver;
