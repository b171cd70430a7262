use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{Map, Value};
use tracing::info;

use crate::io::{output_path, SummaryOutput};

/// Result of Stage 3 writing
#[derive(Debug)]
pub struct Stage3Result {
    /// Path of the summary file
    pub output_path: PathBuf,
}

/// Execute Stage 3: write the completed summary into `out_folder`, named
/// after the input file
pub fn execute_stage3(
    out_folder: &Path,
    input: &Path,
    result: Map<String, Value>,
) -> Result<Stage3Result> {
    let path = output_path(out_folder, input);
    info!("Writing summary to {:?}", path);
    SummaryOutput::new(result).write_json(&path)?;

    Ok(Stage3Result { output_path: path })
}
