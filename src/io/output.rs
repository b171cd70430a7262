use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Suffix appended to the input file name for the summary output
pub const OUTPUT_SUFFIX: &str = ".output.json";

/// Summary file written for a completed job
#[derive(Debug, Clone, Serialize)]
pub struct SummaryOutput {
    /// Provider result object, verbatim
    pub response: Map<String, Value>,
}

impl SummaryOutput {
    pub fn new(response: Map<String, Value>) -> Self {
        Self { response }
    }

    /// Write to a JSON file, replacing any existing file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// `<out_folder>/<input file name>.output.json`
pub fn output_path(out_folder: &Path, input: &Path) -> PathBuf {
    let mut name = input
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(OUTPUT_SUFFIX);
    out_folder.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_path_uses_base_name() {
        assert_eq!(
            output_path(Path::new("/tmp/out"), Path::new("calls/call1.txt")),
            PathBuf::from("/tmp/out/call1.txt.output.json")
        );
    }

    #[test]
    fn test_write_wraps_result_in_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("call1.txt.output.json");
        let mut result = Map::new();
        result.insert("summary".to_string(), json!("Customer asked for a refund."));

        SummaryOutput::new(result).write_json(&path).unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({"response": {"summary": "Customer asked for a refund."}})
        );
    }
}
