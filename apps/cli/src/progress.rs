//! CLI progress listener for sync runs.

use std::sync::Mutex;

use baydesk_core::sync::{JobProgressListener, JobStatus, SyncJob};

/// Prints one line per observed status change; repeated identical
/// snapshots stay quiet.
#[derive(Debug, Default)]
pub struct CliProgressListener {
    last: Mutex<Option<JobStatus>>,
}

impl JobProgressListener for CliProgressListener {
    fn on_status(&self, job: &SyncJob) {
        let mut last = self.last.lock().unwrap();
        if *last != Some(job.status) {
            println!("  status: {}", job.status);
            *last = Some(job.status);
        }
    }
}
