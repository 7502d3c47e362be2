//! Status poller for backend sync jobs.
//!
//! One parameterized polling loop shared by every sync surface. Callers
//! hand in an async status-fetch closure; the poller schedules it at a
//! fixed interval until the first terminal snapshot, a configurable
//! ceiling, or cancellation (dropping the returned future stops all
//! scheduling).

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use tokio::time::{sleep, Instant};

use super::job_model::{JobStatus, SyncJob};
use crate::constants::{POLL_INTERVAL, POLL_MAX_BACKOFF, POLL_MAX_WAIT};
use crate::errors::Result;

/// Configuration for the job poller.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between successful polls.
    pub interval: Duration,
    /// Cap for the backoff delay after consecutive failed polls.
    pub max_backoff: Duration,
    /// Ceiling on total waiting time before the poller gives up with
    /// `TimedOut`.
    pub max_wait: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            max_backoff: POLL_MAX_BACKOFF,
            max_wait: POLL_MAX_WAIT,
        }
    }
}

/// Final observation of a polled job.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The job reached `success`.
    Success(SyncJob),
    /// The job reached `error`.
    Error(SyncJob),
    /// The job never went terminal within the configured ceiling.
    /// Distinct from a backend `error`: the job may still be running.
    TimedOut { waited: Duration },
}

impl PollOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PollOutcome::Success(_))
    }
}

/// Receives every status snapshot the poller observes.
///
/// Implementations surface progress to their own UI (CLI lines, events).
pub trait JobProgressListener: Send + Sync {
    fn on_status(&self, job: &SyncJob);
}

/// Listener for contexts where progress reporting is not needed.
#[derive(Debug, Clone, Default)]
pub struct NoOpProgressListener;

impl JobProgressListener for NoOpProgressListener {
    fn on_status(&self, _job: &SyncJob) {}
}

/// Poll a job until it goes terminal, the ceiling is hit, or the future
/// is dropped.
///
/// A failed fetch is logged and retried with exponential backoff; it never
/// transitions the job. A successful fetch resets the delay to the base
/// interval. The first fetch happens one interval after the trigger, since
/// the trigger response itself already supplies the `queued` snapshot.
pub async fn poll_job<F, Fut>(
    job_id: &str,
    config: &PollConfig,
    listener: &dyn JobProgressListener,
    fetch_status: F,
) -> PollOutcome
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<SyncJob>>,
{
    let started = Instant::now();
    let mut delay = config.interval;

    loop {
        let waited = started.elapsed();
        if waited + delay > config.max_wait {
            warn!(
                "Sync job {} not terminal after {:.0?}, giving up",
                job_id, waited
            );
            return PollOutcome::TimedOut { waited };
        }
        sleep(delay).await;

        match fetch_status(job_id.to_string()).await {
            Ok(job) => {
                listener.on_status(&job);
                match job.status {
                    JobStatus::Success => {
                        debug!("Sync job {} succeeded", job_id);
                        return PollOutcome::Success(job);
                    }
                    JobStatus::Error => {
                        debug!("Sync job {} failed: {}", job_id, job.error_message());
                        return PollOutcome::Error(job);
                    }
                    status => {
                        debug!("Sync job {} is {}, polling again", job_id, status);
                        delay = config.interval;
                    }
                }
            }
            Err(err) => {
                delay = (delay * 2).min(config.max_backoff);
                warn!(
                    "Status poll for job {} failed: {}; retrying in {:.0?}",
                    job_id, err, delay
                );
            }
        }
    }
}
