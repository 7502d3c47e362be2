//! `SyncBackend` implementation over the REST client.

use async_trait::async_trait;

use baydesk_core::errors::Result;
use baydesk_core::sync::{SyncJob, SyncTriggered};
use baydesk_core::transactions::TransactionFilter;

use super::models::{SyncRefresh, SyncTarget};
use super::traits::SyncBackend;
use crate::client::BackofficeApiClient;

#[async_trait]
impl SyncBackend for BackofficeApiClient {
    async fn start_sync(&self, target: SyncTarget) -> Result<SyncTriggered> {
        match target {
            SyncTarget::Financials => self.start_financials_sync().await,
            SyncTarget::Transactions => self.start_transactions_sync().await,
        }
    }

    async fn fetch_job(&self, target: SyncTarget, job_id: &str) -> Result<SyncJob> {
        match target {
            SyncTarget::Financials => self.get_financials_sync_job(job_id).await,
            SyncTarget::Transactions => self.get_transactions_sync_job(job_id).await,
        }
    }

    async fn refresh(&self, target: SyncTarget) -> Result<SyncRefresh> {
        match target {
            SyncTarget::Financials => Ok(SyncRefresh::Financials(
                self.get_financials_summary().await?,
            )),
            SyncTarget::Transactions => Ok(SyncRefresh::Transactions(
                self.list_transactions(&TransactionFilter::default()).await?,
            )),
        }
    }
}
