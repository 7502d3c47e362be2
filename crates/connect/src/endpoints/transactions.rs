//! Transactions endpoints.

use baydesk_core::errors::Result;
use baydesk_core::sync::{SyncJob, SyncTriggered};
use baydesk_core::transactions::{Transaction, TransactionFilter};

use crate::client::BackofficeApiClient;

impl BackofficeApiClient {
    /// Fetch transactions matching the filter.
    pub async fn list_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        self.get_with_query("/api/transactions", &filter.to_query())
            .await
    }

    /// Ask the backend to start a transactions sync job.
    pub async fn start_transactions_sync(&self) -> Result<SyncTriggered> {
        self.post_empty("/api/transactions/admin/sync").await
    }

    /// Fetch the current snapshot of a transactions sync job.
    pub async fn get_transactions_sync_job(&self, job_id: &str) -> Result<SyncJob> {
        self.get(&format!("/api/transactions/admin/sync/jobs/{}", job_id))
            .await
    }
}
