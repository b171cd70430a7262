use async_trait::async_trait;

use crate::error::SummaryError;
use crate::models::{JobStatus, RequestId, SummaryRequest};

/// An asynchronous summarization service
///
/// Jobs are started with `submit` and observed with `status` until they reach
/// a terminal state.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Start a summarization job and return its request id
    async fn submit(&self, request: &SummaryRequest<'_>) -> Result<RequestId, SummaryError>;

    /// Fetch the current state of a previously submitted job
    async fn status(&self, request_id: &RequestId) -> Result<JobStatus, SummaryError>;
}
