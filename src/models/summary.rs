use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::Segment;

/// Summary type sent with every request
pub const SUMMARY_TYPE: &str = "abstractive";

/// Summarization model offered by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryModel {
    #[default]
    Iamus,
    Cassandra,
}

impl SummaryModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryModel::Iamus => "iamus",
            SummaryModel::Cassandra => "cassandra",
        }
    }
}

impl fmt::Display for SummaryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for the async summary endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest<'a> {
    pub summary_type: &'static str,
    pub summary_data: &'a [Segment],
    pub model: SummaryModel,
}

impl<'a> SummaryRequest<'a> {
    pub fn new(segments: &'a [Segment], model: SummaryModel) -> Self {
        Self {
            summary_type: SUMMARY_TYPE,
            summary_data: segments,
            model,
        }
    }
}

/// Opaque handle for an asynchronous summarization job
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of a job as reported by the status endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum JobStatus {
    /// Job is still running
    InProgress,
    /// Job finished; carries the provider's summary object
    Completed(Map<String, Value>),
    /// Job reported a status that will never produce a result
    Failed { status: String },
}
