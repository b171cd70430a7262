use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::SummaryProvider;
use crate::io::parse_transcript_file;
use crate::models::SummaryModel;
use crate::stages::{
    execute_stage1, execute_stage2, execute_stage3, PollConfig, PollOutcome, SubmitOutcome,
};

/// How processing of a single transcript ended
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Summary written to this path
    Written(PathBuf),
    /// No summary was produced; nothing was written
    Failed(String),
}

/// Parse, submit, poll and write the summary for one transcript file
///
/// Parse and write errors propagate; provider failures end as
/// `FileOutcome::Failed` without touching the output folder.
pub async fn process_file<P: SummaryProvider + ?Sized>(
    provider: &P,
    input: &Path,
    out_folder: &Path,
    model: SummaryModel,
    poll_config: &PollConfig,
) -> Result<FileOutcome> {
    info!("Processing file: {:?}", input);
    let segments = parse_transcript_file(input)
        .with_context(|| format!("Failed to parse transcript {:?}", input))?;
    info!("Loaded {} segments", segments.len());

    let request_id = match execute_stage1(provider, &segments, model).await {
        SubmitOutcome::Submitted(id) => id,
        SubmitOutcome::Failed(reason) => return Ok(FileOutcome::Failed(reason)),
    };
    drop(segments);

    let result = match execute_stage2(provider, &request_id, poll_config).await {
        PollOutcome::Completed(result) => result,
        PollOutcome::Failed(reason) => return Ok(FileOutcome::Failed(reason)),
        PollOutcome::GaveUp { attempts } => {
            return Ok(FileOutcome::Failed(format!(
                "request {} still in progress after {} status checks",
                request_id, attempts
            )));
        }
    };

    let written = execute_stage3(out_folder, input, result)?;
    info!("Completed summary for file: {:?}", input);
    Ok(FileOutcome::Written(written.output_path))
}

/// Totals for a batch run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub written: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Process transcripts one after another; a failing file does not stop the rest
pub async fn process_batch<P: SummaryProvider + ?Sized>(
    provider: &P,
    inputs: &[PathBuf],
    out_folder: &Path,
    model: SummaryModel,
    poll_config: &PollConfig,
) -> BatchReport {
    let mut report = BatchReport::default();

    for input in inputs {
        match process_file(provider, input, out_folder, model, poll_config).await {
            Ok(FileOutcome::Written(path)) => {
                info!("Output written to {:?}", path);
                report.written += 1;
            }
            Ok(FileOutcome::Failed(reason)) => {
                warn!("No summary for {:?}: {}", input, reason);
                report.failed += 1;
            }
            Err(e) => {
                warn!("{:#}", e);
                report.failed += 1;
            }
        }
    }

    report
}
