use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use crate::api::SummaryProvider;
use crate::error::SummaryError;
use crate::models::{JobStatus, RequestId, SummaryRequest};

/// Provider that replays canned responses and records what it was asked
pub struct ScriptedProvider {
    submit_result: Mutex<Option<Result<RequestId, SummaryError>>>,
    statuses: Mutex<VecDeque<Result<JobStatus, SummaryError>>>,
    watch_path: Option<PathBuf>,
    pub submitted: Mutex<Vec<Value>>,
    pub polled_ids: Mutex<Vec<RequestId>>,
    /// Whether `watch_path` existed when each status call arrived
    pub output_seen: Mutex<Vec<bool>>,
}

impl ScriptedProvider {
    pub fn accepting(request_id: &str, statuses: Vec<Result<JobStatus, SummaryError>>) -> Self {
        Self::with_submit(Ok(RequestId::new(request_id)), statuses)
    }

    pub fn rejecting(error: SummaryError) -> Self {
        Self::with_submit(Err(error), Vec::new())
    }

    fn with_submit(
        submit: Result<RequestId, SummaryError>,
        statuses: Vec<Result<JobStatus, SummaryError>>,
    ) -> Self {
        Self {
            submit_result: Mutex::new(Some(submit)),
            statuses: Mutex::new(statuses.into()),
            watch_path: None,
            submitted: Mutex::new(Vec::new()),
            polled_ids: Mutex::new(Vec::new()),
            output_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn watching(mut self, path: PathBuf) -> Self {
        self.watch_path = Some(path);
        self
    }

    pub fn status_calls(&self) -> usize {
        self.polled_ids.lock().unwrap().len()
    }
}

#[async_trait]
impl SummaryProvider for ScriptedProvider {
    async fn submit(&self, request: &SummaryRequest<'_>) -> Result<RequestId, SummaryError> {
        self.submitted
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());
        self.submit_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(SummaryError::MissingRequestId))
    }

    async fn status(&self, request_id: &RequestId) -> Result<JobStatus, SummaryError> {
        self.polled_ids.lock().unwrap().push(request_id.clone());
        if let Some(path) = &self.watch_path {
            self.output_seen.lock().unwrap().push(path.exists());
        }
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(SummaryError::MissingField("status")))
    }
}

pub fn completed(summary: &str) -> JobStatus {
    let mut result = Map::new();
    result.insert("summary".to_string(), json!(summary));
    JobStatus::Completed(result)
}
