//! Read-only key registry
//!
//! Loaded once at startup and shared as `Arc<KeyRegistry>`. Nothing mutates it
//! after construction, so concurrent lookups need no locking.

use serde::Serialize;
use tracing::{info, warn};

use super::entity::ApiKeyRecord;
use super::source::RegistrySource;

/// Whether the registry source could be read at load time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RegistryStatus {
    /// Source was read and parsed (possibly zero records)
    Loaded,
    /// Source could not be read or parsed; the registry is empty
    Unavailable { reason: String },
}

/// Snapshot of registered API keys
#[derive(Debug, Clone)]
pub struct KeyRegistry {
    records: Vec<ApiKeyRecord>,
    status: RegistryStatus,
}

impl KeyRegistry {
    /// Create a loaded registry from records
    pub fn new(records: Vec<ApiKeyRecord>) -> Self {
        Self {
            records,
            status: RegistryStatus::Loaded,
        }
    }

    /// Create an empty registry whose source could not be read
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            status: RegistryStatus::Unavailable {
                reason: reason.into(),
            },
        }
    }

    /// Load from a source.
    ///
    /// Never fails: any read or parse error yields an empty registry, so every
    /// later lookup misses. The error is kept in [`RegistryStatus::Unavailable`]
    /// for readiness reporting.
    pub async fn load(source: &dyn RegistrySource) -> Self {
        let label = source.describe();

        match source.fetch().await {
            Ok(records) => {
                info!(source = %label, count = records.len(), "API keys loaded");
                Self::new(records)
            }
            Err(e) => {
                warn!(source = %label, error = %e, "Failed to load API keys, registry is empty");
                Self::unavailable(e.to_string())
            }
        }
    }

    /// First record whose `apikey` equals the given value byte for byte
    pub fn lookup(&self, apikey: &str) -> Option<&ApiKeyRecord> {
        self.records.iter().find(|record| record.matches(apikey))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn status(&self) -> &RegistryStatus {
        &self.status
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, RegistryStatus::Loaded)
    }
}

impl Default for KeyRegistry {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
