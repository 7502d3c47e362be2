//! Traits defining the contract for sync coordination.

use async_trait::async_trait;

use baydesk_core::errors::Result;
use baydesk_core::sync::{SyncJob, SyncTriggered};

use super::models::{SyncRefresh, SyncTarget};

/// The three backend calls a coordinated sync run needs.
///
/// Implemented by [`crate::client::BackofficeApiClient`]; test doubles
/// script the status sequence instead of talking HTTP.
#[async_trait]
pub trait SyncBackend: Send + Sync {
    /// Trigger a sync job for the target.
    async fn start_sync(&self, target: SyncTarget) -> Result<SyncTriggered>;

    /// Fetch the current job snapshot.
    async fn fetch_job(&self, target: SyncTarget, job_id: &str) -> Result<SyncJob>;

    /// Re-fetch the target's aggregate data after a successful sync.
    async fn refresh(&self, target: SyncTarget) -> Result<SyncRefresh>;
}
