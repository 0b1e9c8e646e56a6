//! Structured issuance decision events

use chrono::Utc;
use serde::Serialize;

/// One decision point of the issuance pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssuanceEvent {
    /// No registry record has the presented key
    UnknownApiKey { apikey: String },
    /// The matched record has no stored hash
    MissingHash { apikey: String },
    /// The hash comparison itself failed
    HashCompareError { apikey: String, detail: String },
    /// A token was signed and returned
    TokenIssued { apikey: String, timestamp: String },
    /// The secret did not verify
    IssuanceFailed { apikey: String, timestamp: String },
    /// The secret verified but the payload could not be signed
    SigningFailed { apikey: String, detail: String },
}

impl IssuanceEvent {
    pub fn unknown_apikey(apikey: impl Into<String>) -> Self {
        Self::UnknownApiKey {
            apikey: apikey.into(),
        }
    }

    pub fn missing_hash(apikey: impl Into<String>) -> Self {
        Self::MissingHash {
            apikey: apikey.into(),
        }
    }

    pub fn hash_compare_error(apikey: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::HashCompareError {
            apikey: apikey.into(),
            detail: detail.into(),
        }
    }

    pub fn token_issued(apikey: impl Into<String>) -> Self {
        Self::TokenIssued {
            apikey: apikey.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn issuance_failed(apikey: impl Into<String>) -> Self {
        Self::IssuanceFailed {
            apikey: apikey.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn signing_failed(apikey: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::SigningFailed {
            apikey: apikey.into(),
            detail: detail.into(),
        }
    }

    /// Stable event name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownApiKey { .. } => "unknown_apikey",
            Self::MissingHash { .. } => "missing_hash",
            Self::HashCompareError { .. } => "hash_compare_error",
            Self::TokenIssued { .. } => "token_issued",
            Self::IssuanceFailed { .. } => "issuance_failed",
            Self::SigningFailed { .. } => "signing_failed",
        }
    }

    pub fn apikey(&self) -> &str {
        match self {
            Self::UnknownApiKey { apikey }
            | Self::MissingHash { apikey }
            | Self::HashCompareError { apikey, .. }
            | Self::TokenIssued { apikey, .. }
            | Self::IssuanceFailed { apikey, .. }
            | Self::SigningFailed { apikey, .. } => apikey,
        }
    }
}
