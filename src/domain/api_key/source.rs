//! Registry source trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::ApiKeyRecord;
use crate::domain::DomainError;

/// Where the key registry is read from (file, config service, ...)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Short label used in logs
    fn describe(&self) -> String;

    /// Read and parse every record
    async fn fetch(&self) -> Result<Vec<ApiKeyRecord>, DomainError>;
}
