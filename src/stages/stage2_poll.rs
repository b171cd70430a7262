use std::time::Duration;

use serde_json::{Map, Value};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::api::SummaryProvider;
use crate::models::{JobStatus, RequestId};

/// Configuration for Stage 2 polling
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Pause between status checks while the job is in progress
    pub interval: Duration,
    /// Maximum number of status checks (None = unbounded)
    pub max_attempts: Option<u32>,
    /// Overall polling deadline (None = unbounded)
    pub timeout: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            max_attempts: None,
            timeout: None,
        }
    }
}

/// Result of Stage 2 polling
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The job completed with this result object
    Completed(Map<String, Value>),
    /// The job failed, or its status could not be read
    Failed(String),
    /// The attempt cap or deadline was reached while still in progress
    GaveUp { attempts: u32 },
}

/// Execute Stage 2: poll the job until it reaches a terminal state
pub async fn execute_stage2<P: SummaryProvider + ?Sized>(
    provider: &P,
    request_id: &RequestId,
    config: &PollConfig,
) -> PollOutcome {
    let started = Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        debug!("Checking status of {} (attempt {})", request_id, attempts);

        match provider.status(request_id).await {
            Ok(JobStatus::Completed(result)) => {
                info!("Summary completed for request_id: {}", request_id);
                return PollOutcome::Completed(result);
            }
            Ok(JobStatus::Failed { status }) => {
                warn!("request_id: {} status: {}", request_id, status);
                return PollOutcome::Failed(format!("job ended with status {:?}", status));
            }
            Err(e) => {
                warn!("Status check for {} failed: {}", request_id, e);
                return PollOutcome::Failed(e.to_string());
            }
            Ok(JobStatus::InProgress) => {
                info!("Summarization is in progress");
            }
        }

        if config.max_attempts.is_some_and(|max| attempts >= max)
            || config
                .timeout
                .is_some_and(|limit| started.elapsed().saturating_add(config.interval) > limit)
        {
            warn!(
                "Giving up on {} after {} status checks",
                request_id, attempts
            );
            return PollOutcome::GaveUp { attempts };
        }

        tokio::time::sleep(config.interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SummaryError;
    use crate::testing::{completed, ScriptedProvider};

    fn fast() -> PollConfig {
        PollConfig {
            interval: Duration::ZERO,
            ..Default::default()
        }
    }

    #[test]
    fn test_poll_config_default() {
        let config = PollConfig::default();
        assert_eq!(config.interval, Duration::from_secs(10));
        assert_eq!(config.max_attempts, None);
        assert_eq!(config.timeout, None);
    }

    #[tokio::test]
    async fn test_polls_until_completed() {
        let provider = ScriptedProvider::accepting(
            "req-1",
            vec![
                Ok(JobStatus::InProgress),
                Ok(JobStatus::InProgress),
                Ok(completed("done")),
            ],
        );

        let outcome = execute_stage2(&provider, &RequestId::new("req-1"), &fast()).await;

        assert!(matches!(outcome, PollOutcome::Completed(_)));
        assert_eq!(provider.status_calls(), 3);
        assert!(
            provider
                .polled_ids
                .lock()
                .unwrap()
                .iter()
                .all(|id| id.as_str() == "req-1")
        );
    }

    #[tokio::test]
    async fn test_failed_status_stops_polling() {
        let provider = ScriptedProvider::accepting(
            "req-2",
            vec![
                Ok(JobStatus::Failed {
                    status: "errored".to_string(),
                }),
                Ok(completed("never reached")),
            ],
        );

        let outcome = execute_stage2(&provider, &RequestId::new("req-2"), &fast()).await;

        assert!(matches!(outcome, PollOutcome::Failed(_)));
        assert_eq!(provider.status_calls(), 1);
    }

    #[tokio::test]
    async fn test_status_error_is_failure() {
        let provider =
            ScriptedProvider::accepting("req-3", vec![Err(SummaryError::MissingField("status"))]);

        let outcome = execute_stage2(&provider, &RequestId::new("req-3"), &fast()).await;

        assert!(matches!(outcome, PollOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let provider = ScriptedProvider::accepting(
            "req-4",
            vec![
                Ok(JobStatus::InProgress),
                Ok(JobStatus::InProgress),
                Ok(JobStatus::InProgress),
            ],
        );
        let config = PollConfig {
            max_attempts: Some(2),
            ..fast()
        };

        let outcome = execute_stage2(&provider, &RequestId::new("req-4"), &config).await;

        assert_eq!(outcome, PollOutcome::GaveUp { attempts: 2 });
        assert_eq!(provider.status_calls(), 2);
    }

    #[tokio::test]
    async fn test_gives_up_when_next_pause_exceeds_timeout() {
        let provider = ScriptedProvider::accepting("req-5", vec![Ok(JobStatus::InProgress)]);
        let config = PollConfig {
            interval: Duration::from_secs(10),
            max_attempts: None,
            timeout: Some(Duration::from_secs(5)),
        };

        let outcome = execute_stage2(&provider, &RequestId::new("req-5"), &config).await;

        assert_eq!(outcome, PollOutcome::GaveUp { attempts: 1 });
    }

    #[tokio::test]
    async fn test_huge_interval_with_timeout_gives_up() {
        let provider = ScriptedProvider::accepting("req-6", vec![Ok(JobStatus::InProgress)]);
        let config = PollConfig {
            interval: Duration::from_secs(u64::MAX),
            max_attempts: None,
            timeout: Some(Duration::from_secs(60)),
        };

        let outcome = execute_stage2(&provider, &RequestId::new("req-6"), &config).await;

        assert_eq!(outcome, PollOutcome::GaveUp { attempts: 1 });
    }
}
