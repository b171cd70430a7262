use std::path::PathBuf;

/// Errors raised while reading a transcript file
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Failed to read transcript {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported transcript format: {0:?} (expected .txt or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("Line {line_number} has no speaker separator: {line:?}")]
    MalformedLine { line_number: usize, line: String },

    #[error("Invalid transcript JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transcript JSON has no \"segments\" array")]
    MissingSegments,

    #[error("Segment {index} is invalid: {reason}")]
    InvalidSegment { index: usize, reason: String },
}

/// Errors raised while talking to the summarization provider
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("DEEPAFFECTS_API_KEY is not set")]
    MissingApiKey,

    #[error("DEEPAFFECTS_API_KEY still holds the placeholder value")]
    PlaceholderApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("DeepAffects API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Response has no request_id")]
    MissingRequestId,

    #[error("Response field {0:?} is missing or has the wrong type")]
    MissingField(&'static str),
}

impl SummaryError {
    /// Whether this error means no usable API key was configured
    pub fn is_missing_credentials(&self) -> bool {
        matches!(
            self,
            SummaryError::MissingApiKey | SummaryError::PlaceholderApiKey
        )
    }
}

/// Command-line arguments that failed validation
#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    #[error("Input path does not exist: {0:?}")]
    InputNotFound(PathBuf),

    #[error("Invalid input file {0:?}. Should be either json or txt file")]
    InvalidInputFile(PathBuf),

    #[error("Input folder {0:?} contains no txt or json transcripts")]
    EmptyInputFolder(PathBuf),

    #[error("Invalid output folder {0:?}. Output folder does not exist")]
    InvalidOutputFolder(PathBuf),
}
