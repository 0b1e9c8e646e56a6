//! Sinks for issuance events

#[cfg(test)]
use mockall::automock;
use tracing::{error, info, warn};

use crate::domain::IssuanceEvent;

/// Receives every decision event the issuer emits
#[cfg_attr(test, automock)]
pub trait IssuanceObserver: Send + Sync {
    fn record(&self, event: &IssuanceEvent);
}

/// Emits issuance events as `tracing` events
#[derive(Debug, Clone, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl IssuanceObserver for TracingObserver {
    fn record(&self, event: &IssuanceEvent) {
        let kind = event.kind();

        match event {
            IssuanceEvent::UnknownApiKey { apikey } => {
                warn!(kind, apikey = %apikey, "API key not found");
            }
            IssuanceEvent::MissingHash { apikey } => {
                error!(kind, apikey = %apikey, "Secret hash is missing for API key");
            }
            IssuanceEvent::HashCompareError { apikey, detail } => {
                error!(kind, apikey = %apikey, detail = %detail, "Failed to compare secret");
            }
            IssuanceEvent::TokenIssued { apikey, timestamp } => {
                info!(kind, apikey = %apikey, timestamp = %timestamp, "Token issued");
            }
            IssuanceEvent::IssuanceFailed { apikey, timestamp } => {
                warn!(kind, apikey = %apikey, timestamp = %timestamp, "Token issuance failed");
            }
            IssuanceEvent::SigningFailed { apikey, detail } => {
                error!(kind, apikey = %apikey, detail = %detail, "Failed to sign token");
            }
        }
    }
}
