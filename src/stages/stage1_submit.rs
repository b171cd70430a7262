use tracing::{info, warn};

use crate::api::SummaryProvider;
use crate::models::{RequestId, Segment, SummaryModel, SummaryRequest};

/// Result of Stage 1 submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The provider accepted the job
    Submitted(RequestId),
    /// The job could not be started; carries the logged reason
    Failed(String),
}

/// Execute Stage 1: submit the segments as an abstractive summary job
///
/// Provider errors are logged and folded into `SubmitOutcome::Failed` so a
/// single bad file never aborts a batch.
pub async fn execute_stage1<P: SummaryProvider + ?Sized>(
    provider: &P,
    segments: &[Segment],
    model: SummaryModel,
) -> SubmitOutcome {
    let request = SummaryRequest::new(segments, model);

    match provider.submit(&request).await {
        Ok(request_id) => {
            info!("Summary job submitted, request_id: {}", request_id);
            SubmitOutcome::Submitted(request_id)
        }
        Err(e) => {
            warn!("Summary submission failed: {}", e);
            SubmitOutcome::Failed(e.to_string())
        }
    }
}
