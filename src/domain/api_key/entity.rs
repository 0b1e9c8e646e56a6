//! API key record and related types

use serde::{Deserialize, Serialize};

/// Classification of what a key is used for (e.g. "Login").
///
/// Carried with the record but never interpreted during issuance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenType {
    pub id: i64,
    pub name: String,
}

impl TokenType {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One registered API key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRecord {
    /// Numeric identifier
    id: i64,
    /// Display name for the key
    name: String,
    /// Purpose descriptor
    #[serde(default, alias = "tipoToken")]
    token_type: TokenType,
    /// Public identifier presented by callers
    apikey: String,
    /// Salted hash of the secret: an Argon2 PHC string or a bcrypt hash.
    /// Never the raw secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secret_hash: Option<String>,
}

impl ApiKeyRecord {
    /// Create a new record
    pub fn new(
        id: i64,
        name: impl Into<String>,
        apikey: impl Into<String>,
        secret_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            token_type: TokenType::default(),
            apikey: apikey.into(),
            secret_hash: Some(secret_hash.into()),
        }
    }

    /// Set the token type descriptor
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Drop the stored hash (models a malformed registry entry)
    pub fn without_secret_hash(mut self) -> Self {
        self.secret_hash = None;
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token_type(&self) -> &TokenType {
        &self.token_type
    }

    pub fn apikey(&self) -> &str {
        &self.apikey
    }

    /// Stored hash, `None` when absent or empty
    pub fn secret_hash(&self) -> Option<&str> {
        self.secret_hash.as_deref().filter(|h| !h.is_empty())
    }

    /// Byte-exact comparison against the public identifier
    pub fn matches(&self, apikey: &str) -> bool {
        self.apikey == apikey
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let json = r#"{
            "id": 1,
            "name": "Front Login Key",
            "tokenType": { "id": 1, "name": "Login" },
            "apikey": "front-login-key",
            "secretHash": "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA"
        }"#;

        let record: ApiKeyRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id(), 1);
        assert_eq!(record.name(), "Front Login Key");
        assert_eq!(record.token_type(), &TokenType::new(1, "Login"));
        assert_eq!(record.apikey(), "front-login-key");
        assert!(record.secret_hash().unwrap().starts_with("$argon2id$"));
    }

    #[test]
    fn test_parse_legacy_token_type_field() {
        let json = r#"{
            "id": 2,
            "name": "Legacy",
            "tipoToken": { "id": 3, "name": "Login" },
            "apikey": "legacy-key",
            "secretHash": "hash"
        }"#;

        let record: ApiKeyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.token_type().id, 3);
    }

    #[test]
    fn test_missing_or_empty_hash() {
        let missing: ApiKeyRecord =
            serde_json::from_str(r#"{"id": 1, "name": "a", "apikey": "k"}"#).unwrap();
        assert!(missing.secret_hash().is_none());

        let empty: ApiKeyRecord =
            serde_json::from_str(r#"{"id": 1, "name": "a", "apikey": "k", "secretHash": ""}"#)
                .unwrap();
        assert!(empty.secret_hash().is_none());
    }

    #[test]
    fn test_matches_is_exact() {
        let record = ApiKeyRecord::new(1, "Key", "front-login-key", "hash");

        assert!(record.matches("front-login-key"));
        assert!(!record.matches("Front-Login-Key"));
        assert!(!record.matches(" front-login-key"));
        assert!(!record.matches("front-login-key "));
        assert!(!record.matches(""));
    }

    #[test]
    fn test_serialize_camel_case() {
        let record = ApiKeyRecord::new(7, "Key", "k", "h").with_token_type(TokenType::new(1, "Login"));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["tokenType"]["name"], "Login");
        assert_eq!(json["secretHash"], "h");
    }
}
