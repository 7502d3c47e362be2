//! Tests for sync job models and the status poller.

use super::*;
use crate::errors::Error;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{sleep, Instant};

// ============================================================================
// Test doubles
// ============================================================================

/// Status endpoint double driven by a scripted sequence of responses.
/// Once the script is exhausted it keeps answering `queued`.
#[derive(Default)]
struct ScriptedStatus {
    script: Mutex<VecDeque<Result<SyncJob, Error>>>,
    calls: AtomicUsize,
}

impl ScriptedStatus {
    fn new(script: Vec<Result<SyncJob, Error>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        })
    }

    fn always_queued() -> Arc<Self> {
        Self::new(Vec::new())
    }

    fn next(&self, job_id: &str) -> Result<SyncJob, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SyncJob::queued(job_id)))
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

/// Listener that records every observed status.
#[derive(Default)]
struct RecordingListener {
    seen: Mutex<Vec<JobStatus>>,
}

impl JobProgressListener for RecordingListener {
    fn on_status(&self, job: &SyncJob) {
        self.seen.lock().unwrap().push(job.status);
    }
}

impl RecordingListener {
    fn seen(&self) -> Vec<JobStatus> {
        self.seen.lock().unwrap().clone()
    }
}

fn success_job(duration_ms: u64, records: u64) -> SyncJob {
    SyncJob {
        job_id: "job-1".to_string(),
        status: JobStatus::Success,
        duration_ms: Some(duration_ms),
        records_stored: Some(records),
        error_text: None,
    }
}

fn error_job(text: &str) -> SyncJob {
    SyncJob {
        job_id: "job-1".to_string(),
        status: JobStatus::Error,
        duration_ms: Some(120),
        records_stored: None,
        error_text: Some(text.to_string()),
    }
}

async fn run_poller(
    script: Arc<ScriptedStatus>,
    listener: &dyn JobProgressListener,
    config: &PollConfig,
) -> PollOutcome {
    poll_job("job-1", config, listener, move |id| {
        let script = script.clone();
        async move { script.next(&id) }
    })
    .await
}

fn fast_config() -> PollConfig {
    PollConfig {
        interval: Duration::from_secs(2),
        max_backoff: Duration::from_secs(30),
        max_wait: Duration::from_secs(600),
    }
}

// ============================================================================
// Job model tests
// ============================================================================

mod job_model_tests {
    use super::*;

    #[test]
    fn test_queued_snapshot() {
        let job = SyncJob::queued("job-42");

        assert_eq!(job.job_id, "job-42");
        assert_eq!(job.status, JobStatus::Queued);
        assert!(!job.is_terminal());
        assert!(job.duration_ms.is_none());
        assert!(job.records_stored.is_none());
        assert!(job.error_text.is_none());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(JobStatus::Success.is_terminal());
        assert!(JobStatus::Error.is_terminal());
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(!JobStatus::Unknown.is_terminal());
    }

    #[test]
    fn test_status_wire_format() {
        let statuses = vec![
            (JobStatus::Queued, "\"queued\""),
            (JobStatus::Running, "\"running\""),
            (JobStatus::Success, "\"success\""),
            (JobStatus::Error, "\"error\""),
        ];

        for (status, expected) in statuses {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, expected);
            let parsed: JobStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_unknown_status_is_non_terminal() {
        let parsed: JobStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(parsed, JobStatus::Unknown);
        assert!(!parsed.is_terminal());
    }

    #[test]
    fn test_success_snapshot_deserialization() {
        let job: SyncJob =
            serde_json::from_str(r#"{"status":"success","duration_ms":450,"records_stored":12}"#)
                .unwrap();

        assert_eq!(job.status, JobStatus::Success);
        assert_eq!(job.duration_ms, Some(450));
        assert_eq!(job.records_stored, Some(12));
        assert!(job.is_terminal());
    }

    #[test]
    fn test_error_snapshot_deserialization() {
        let job: SyncJob =
            serde_json::from_str(r#"{"status":"error","error_text":"upstream timeout"}"#).unwrap();

        assert_eq!(job.status, JobStatus::Error);
        assert_eq!(job.error_message(), "upstream timeout");
    }

    #[test]
    fn test_error_message_fallback() {
        let job: SyncJob = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert_eq!(job.error_message(), "sync failed without detail");
    }

    #[test]
    fn test_trigger_response_deserialization() {
        let triggered: SyncTriggered = serde_json::from_str(r#"{"job_id":"j-7"}"#).unwrap();
        assert_eq!(triggered.job_id, "j-7");
    }
}

// ============================================================================
// Poller tests
// ============================================================================

mod poller_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_stops_after_first_terminal_status() {
        // Extra entries after the terminal one must never be fetched.
        let script = ScriptedStatus::new(vec![
            Ok(SyncJob::queued("job-1")),
            Ok(success_job(450, 12)),
            Ok(SyncJob::queued("job-1")),
        ]);
        let listener = RecordingListener::default();

        let outcome = run_poller(script.clone(), &listener, &fast_config()).await;

        match outcome {
            PollOutcome::Success(job) => {
                assert_eq!(job.duration_ms, Some(450));
                assert_eq!(job.records_stored, Some(12));
            }
            other => panic!("expected success, got {:?}", other),
        }
        assert_eq!(script.calls(), 2);
        assert_eq!(script.remaining(), 1);
        assert_eq!(listener.seen(), vec![JobStatus::Queued, JobStatus::Success]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_status_is_terminal() {
        let script = ScriptedStatus::new(vec![Ok(error_job("upstream timeout"))]);
        let listener = RecordingListener::default();

        let outcome = run_poller(script.clone(), &listener, &fast_config()).await;

        match outcome {
            PollOutcome::Error(job) => assert_eq!(job.error_message(), "upstream timeout"),
            other => panic!("expected error, got {:?}", other),
        }
        assert_eq!(script.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_at_fixed_interval_while_non_terminal() {
        let script = ScriptedStatus::new(vec![
            Ok(SyncJob::queued("job-1")),
            Ok(SyncJob {
                status: JobStatus::Running,
                ..SyncJob::queued("job-1")
            }),
            Ok(success_job(90, 3)),
        ]);
        let started = Instant::now();

        let outcome = run_poller(script.clone(), &NoOpProgressListener, &fast_config()).await;

        assert!(outcome.is_success());
        assert_eq!(script.calls(), 3);
        // Three polls, two seconds apart each.
        assert_eq!(started.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failures_retry_with_backoff() {
        let script = ScriptedStatus::new(vec![
            Err(Error::Transport("connection reset".to_string())),
            Err(Error::Transport("connection reset".to_string())),
            Ok(SyncJob::queued("job-1")),
            Ok(success_job(200, 8)),
        ]);
        let listener = RecordingListener::default();
        let started = Instant::now();

        let outcome = run_poller(script.clone(), &listener, &fast_config()).await;

        assert!(outcome.is_success());
        assert_eq!(script.calls(), 4);
        // Failed polls never reach the listener.
        assert_eq!(listener.seen(), vec![JobStatus::Queued, JobStatus::Success]);
        // 2s, then backoff 4s and 8s, then reset to 2s after the good poll.
        assert_eq!(started.elapsed(), Duration::from_secs(16));
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_is_capped() {
        let mut script = Vec::new();
        for _ in 0..8 {
            script.push(Err(Error::Transport("connection reset".to_string())));
        }
        script.push(Ok(success_job(100, 1)));
        let script = ScriptedStatus::new(script);
        let started = Instant::now();

        let config = PollConfig {
            interval: Duration::from_secs(2),
            max_backoff: Duration::from_secs(8),
            max_wait: Duration::from_secs(600),
        };
        let outcome = run_poller(script.clone(), &NoOpProgressListener, &config).await;

        assert!(outcome.is_success());
        // 2 + 4 + 8 + 8*6 = 62 seconds; the delay never exceeds the cap.
        assert_eq!(started.elapsed(), Duration::from_secs(62));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_after_max_wait() {
        let script = ScriptedStatus::always_queued();
        let config = PollConfig {
            interval: Duration::from_secs(2),
            max_backoff: Duration::from_secs(30),
            max_wait: Duration::from_secs(10),
        };

        let outcome = run_poller(script.clone(), &NoOpProgressListener, &config).await;

        match outcome {
            PollOutcome::TimedOut { waited } => assert_eq!(waited, Duration::from_secs(10)),
            other => panic!("expected timeout, got {:?}", other),
        }
        assert_eq!(script.calls(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_max_wait_below_interval_never_fetches() {
        let script = ScriptedStatus::always_queued();
        let config = PollConfig {
            interval: Duration::from_secs(2),
            max_backoff: Duration::from_secs(30),
            max_wait: Duration::from_secs(1),
        };

        let outcome = run_poller(script.clone(), &NoOpProgressListener, &config).await;

        assert!(matches!(outcome, PollOutcome::TimedOut { .. }));
        assert_eq!(script.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_stops_scheduling() {
        let script = ScriptedStatus::always_queued();
        let listener = Arc::new(RecordingListener::default());

        let poll_script = script.clone();
        let poll_listener = listener.clone();
        let handle = tokio::spawn(async move {
            poll_job(
                "job-1",
                &fast_config(),
                poll_listener.as_ref(),
                move |id| {
                    let script = poll_script.clone();
                    async move { script.next(&id) }
                },
            )
            .await
        });

        // Let three polls happen (t = 2s, 4s, 6s), then tear down.
        sleep(Duration::from_secs(7)).await;
        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());

        let calls_at_teardown = script.calls();
        assert_eq!(calls_at_teardown, 3);

        // No late poll or listener update may arrive after teardown.
        sleep(Duration::from_secs(60)).await;
        assert_eq!(script.calls(), calls_at_teardown);
        assert_eq!(listener.seen().len(), calls_at_teardown);
    }
}
