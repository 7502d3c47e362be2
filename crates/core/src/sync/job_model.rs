//! Sync job domain models.
//!
//! A sync job is owned and mutated exclusively by the backend; this client
//! only ever holds an eventually-consistent snapshot obtained by polling.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a backend sync job.
///
/// A job moves monotonically from `Queued` toward exactly one terminal
/// status; a terminal job is never re-polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Accepted by the backend, not started yet
    Queued,
    /// Actively pulling records
    Running,
    /// Finished, records stored
    Success,
    /// Finished with a failure
    Error,
    /// Any status this client does not know; treated as still in flight
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Whether the job has reached a terminal status.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Success | JobStatus::Error)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Queued => write!(f, "queued"),
            JobStatus::Running => write!(f, "running"),
            JobStatus::Success => write!(f, "success"),
            JobStatus::Error => write!(f, "error"),
            JobStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Response to a sync trigger request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SyncTriggered {
    /// Opaque identifier assigned by the backend at creation.
    pub job_id: String,
}

/// Snapshot of a sync job as reported by the status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SyncJob {
    /// Not every status response echoes the id back.
    #[serde(default)]
    pub job_id: String,

    pub status: JobStatus,

    /// Populated once the job is terminal.
    #[serde(default)]
    pub duration_ms: Option<u64>,

    /// Populated on success.
    #[serde(default)]
    pub records_stored: Option<u64>,

    /// Populated on error.
    #[serde(default)]
    pub error_text: Option<String>,
}

impl SyncJob {
    /// A fresh snapshot for a job the backend just accepted.
    pub fn queued(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            status: JobStatus::Queued,
            duration_ms: None,
            records_stored: None,
            error_text: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Human-readable failure detail, falling back to a generic message.
    pub fn error_message(&self) -> String {
        self.error_text
            .clone()
            .unwrap_or_else(|| "sync failed without detail".to_string())
    }
}
