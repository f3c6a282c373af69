use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SyncReport {
    pub fetched: usize,
    pub imported: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SyncCatalogError {
    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Pull a batch from the external catalog and import the records whose
/// external id has no live recipe yet. Re-running against an unchanged
/// catalog imports nothing.
#[async_trait]
pub trait SyncCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<SyncReport, SyncCatalogError>;
}
