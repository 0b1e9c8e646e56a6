//! JSON file registry source

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::{ApiKeyRecord, DomainError, RegistrySource};

/// Reads the registry from a JSON array document on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RegistrySource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<ApiKeyRecord>, DomainError> {
        let data = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::registry(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&data).map_err(|e| {
            DomainError::registry(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}
