pub mod api;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod stages;

#[cfg(test)]
mod testing;

pub use api::{DeepAffectsClient, DeepAffectsConfig, SummaryProvider};
pub use error::{ArgumentError, SummaryError, TranscriptError};
pub use io::{collect_inputs, parse_transcript_file, SummaryOutput};
pub use models::{JobStatus, RequestId, Segment, SummaryModel, SummaryRequest};
pub use pipeline::{process_batch, process_file, BatchReport, FileOutcome};
pub use stages::{
    execute_stage1, execute_stage2, execute_stage3, PollConfig, PollOutcome, SubmitOutcome,
};
