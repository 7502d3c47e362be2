//! Centralized sync coordinator.
//!
//! One shared trigger/poll/refresh implementation for every syncable
//! area, driven by a [`SyncBackend`] and reporting through a pluggable
//! listener.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use log::{info, warn};
use tokio::time::Instant;

use baydesk_core::errors::{Error, Result};
use baydesk_core::sync::{poll_job, JobProgressListener, PollConfig, PollOutcome, SyncJob};

use super::models::{SyncReport, SyncTarget};
use super::traits::SyncBackend;

/// Coordinates sync runs across targets.
///
/// At most one run per target may be in flight at a time; a second
/// request is rejected immediately instead of queueing.
pub struct SyncCoordinator {
    backend: Arc<dyn SyncBackend>,
    listener: Arc<dyn JobProgressListener>,
    config: PollConfig,
    in_flight: Mutex<HashSet<SyncTarget>>,
}

/// Releases the in-flight slot even when the run future is dropped
/// mid-poll (caller teardown).
struct InFlightSlot<'a> {
    coordinator: &'a SyncCoordinator,
    target: SyncTarget,
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        if let Ok(mut in_flight) = self.coordinator.in_flight.lock() {
            in_flight.remove(&self.target);
        }
    }
}

impl SyncCoordinator {
    /// Create a new coordinator.
    pub fn new(
        backend: Arc<dyn SyncBackend>,
        listener: Arc<dyn JobProgressListener>,
        config: PollConfig,
    ) -> Self {
        Self {
            backend,
            listener,
            config,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Whether a run for the target is currently in flight.
    pub fn is_in_flight(&self, target: SyncTarget) -> bool {
        self.in_flight
            .lock()
            .map(|set| set.contains(&target))
            .unwrap_or(false)
    }

    /// Run a full sync for the target: trigger, poll until terminal (or
    /// the ceiling), refresh the aggregate data exactly once on success.
    pub async fn run(&self, target: SyncTarget) -> Result<SyncReport> {
        {
            let mut in_flight = self
                .in_flight
                .lock()
                .map_err(|_| Error::Unexpected("in-flight set lock poisoned".to_string()))?;
            if !in_flight.insert(target) {
                return Err(Error::SyncInFlight(target.to_string()));
            }
        }
        let _slot = InFlightSlot {
            coordinator: self,
            target,
        };

        self.run_inner(target).await
    }

    async fn run_inner(&self, target: SyncTarget) -> Result<SyncReport> {
        info!("Starting {} sync...", target);
        let triggered = self.backend.start_sync(target).await?;

        // The trigger response itself is the first visible snapshot.
        self.listener
            .on_status(&SyncJob::queued(triggered.job_id.as_str()));

        let started = Instant::now();
        let backend = Arc::clone(&self.backend);
        let outcome = poll_job(
            &triggered.job_id,
            &self.config,
            self.listener.as_ref(),
            move |id| {
                let backend = Arc::clone(&backend);
                async move { backend.fetch_job(target, &id).await }
            },
        )
        .await;
        let elapsed = started.elapsed();

        let refreshed = match &outcome {
            PollOutcome::Success(job) => {
                info!(
                    "{} sync succeeded: {} records in {} ms",
                    target,
                    job.records_stored.unwrap_or(0),
                    job.duration_ms.unwrap_or(elapsed.as_millis() as u64),
                );
                match self.backend.refresh(target).await {
                    Ok(data) => Some(data),
                    Err(err) => {
                        warn!("Post-sync refresh for {} failed: {}", target, err);
                        None
                    }
                }
            }
            PollOutcome::Error(job) => {
                warn!("{} sync failed: {}", target, job.error_message());
                None
            }
            PollOutcome::TimedOut { waited } => {
                warn!(
                    "{} sync still running after {:.0?}; stopped watching",
                    target, waited
                );
                None
            }
        };

        Ok(SyncReport {
            target,
            outcome,
            refreshed,
            elapsed,
        })
    }
}
