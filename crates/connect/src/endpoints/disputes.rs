//! Disputes endpoints.

use baydesk_core::disputes::Dispute;
use baydesk_core::errors::Result;

use crate::client::BackofficeApiClient;

impl BackofficeApiClient {
    /// Fetch all payment disputes.
    pub async fn list_disputes(&self) -> Result<Vec<Dispute>> {
        self.get("/api/ebay/disputes").await
    }
}
