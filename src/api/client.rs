use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::api::{DeepAffectsConfig, SummaryProvider};
use crate::error::SummaryError;
use crate::models::{JobStatus, RequestId, SummaryRequest};

/// DeepAffects async summary API client
pub struct DeepAffectsClient {
    client: Client,
    config: DeepAffectsConfig,
}

impl DeepAffectsClient {
    pub fn new(config: DeepAffectsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn read_json(response: Response) -> Result<Value, SummaryError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SummaryError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl SummaryProvider for DeepAffectsClient {
    async fn submit(&self, request: &SummaryRequest<'_>) -> Result<RequestId, SummaryError> {
        debug!(
            "Submitting {} segments with model {}",
            request.summary_data.len(),
            request.model
        );

        let response = self
            .client
            .post(self.config.summary_url())
            .query(&[("apikey", self.config.api_key.as_str())])
            .json(request)
            .send()
            .await?;

        request_id_from(&Self::read_json(response).await?)
    }

    async fn status(&self, request_id: &RequestId) -> Result<JobStatus, SummaryError> {
        let response = self
            .client
            .get(self.config.status_url())
            .query(&[
                ("apikey", self.config.api_key.as_str()),
                ("request_id", request_id.as_str()),
            ])
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        interpret_status(Self::read_json(response).await?)
    }
}

/// Extract the job handle from a submit response
pub fn request_id_from(body: &Value) -> Result<RequestId, SummaryError> {
    match body.get("request_id") {
        Some(Value::String(id)) if !id.trim().is_empty() => Ok(RequestId::new(id.as_str())),
        Some(Value::Number(id)) => Ok(RequestId::new(id.to_string())),
        _ => Err(SummaryError::MissingRequestId),
    }
}

/// Map a status response onto a job state
///
/// The `status` field is matched case-insensitively: anything containing
/// "progress" is still running, anything containing "completed" must carry
/// the result object under `response.response`, and every other value is a
/// terminal failure.
pub fn interpret_status(mut body: Value) -> Result<JobStatus, SummaryError> {
    let status = body
        .get("status")
        .and_then(Value::as_str)
        .ok_or(SummaryError::MissingField("status"))?
        .trim()
        .to_lowercase();

    if status.contains("progress") {
        return Ok(JobStatus::InProgress);
    }

    if status.contains("completed") {
        return match body
            .get_mut("response")
            .and_then(|r| r.get_mut("response"))
            .map(Value::take)
        {
            Some(Value::Object(result)) => Ok(JobStatus::Completed(result)),
            _ => Err(SummaryError::MissingField("response.response")),
        };
    }

    Ok(JobStatus::Failed { status })
}
