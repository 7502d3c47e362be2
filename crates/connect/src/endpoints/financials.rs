//! Financials endpoints.

use baydesk_core::errors::Result;
use baydesk_core::financials::FinancialSummary;
use baydesk_core::sync::{SyncJob, SyncTriggered};

use crate::client::BackofficeApiClient;

impl BackofficeApiClient {
    /// Fetch the aggregate financial summary.
    pub async fn get_financials_summary(&self) -> Result<FinancialSummary> {
        self.get("/api/financials/summary").await
    }

    /// Ask the backend to start a financials sync job.
    pub async fn start_financials_sync(&self) -> Result<SyncTriggered> {
        self.post_empty("/api/financials/admin/sync").await
    }

    /// Fetch the current snapshot of a financials sync job.
    pub async fn get_financials_sync_job(&self, job_id: &str) -> Result<SyncJob> {
        self.get(&format!("/api/financials/admin/sync/jobs/{}", job_id))
            .await
    }
}
