//! In-memory registry source

use async_trait::async_trait;

use crate::domain::{ApiKeyRecord, DomainError, RegistrySource};

/// Serves a fixed list of records
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<ApiKeyRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<ApiKeyRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RegistrySource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn fetch(&self) -> Result<Vec<ApiKeyRecord>, DomainError> {
        Ok(self.records.clone())
    }
}
