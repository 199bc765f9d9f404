pub mod error;
pub mod http;

use async_trait::async_trait;

use crate::models::{ExecutionFilter, ExecutionPage};

pub use error::ApiError;
pub use http::ExecutionClient;

/// The store's view of the execution-log service. The reqwest-backed
/// [`ExecutionClient`] is the production implementation; tests inject
/// their own.
#[async_trait]
pub trait ExecutionApi: Send + Sync {
    async fn list_executions(
        &self,
        page: u32,
        filter: &ExecutionFilter,
    ) -> Result<ExecutionPage, ApiError>;

    async fn unread_count(&self) -> Result<u64, ApiError>;

    async fn mark_read(&self, id: &str) -> Result<(), ApiError>;

    async fn mark_all_read(&self) -> Result<(), ApiError>;

    async fn delete_execution(&self, id: &str) -> Result<(), ApiError>;

    async fn delete_all(&self) -> Result<(), ApiError>;
}
