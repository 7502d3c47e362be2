//! eBay OAuth link endpoints.

use baydesk_core::ebay::{EbayAuthLogEntry, EbayAuthStatus, EbayConnectResponse};
use baydesk_core::errors::Result;

use crate::client::BackofficeApiClient;

impl BackofficeApiClient {
    /// Start the OAuth consent flow; returns the URL the user must open.
    pub async fn ebay_connect(&self) -> Result<EbayConnectResponse> {
        self.post_empty("/api/ebay/auth/connect").await
    }

    /// Drop the stored eBay authorization.
    pub async fn ebay_disconnect(&self) -> Result<()> {
        self.post_ignore_body("/api/ebay/auth/disconnect").await
    }

    /// Fetch the current state of the eBay link.
    pub async fn ebay_auth_status(&self) -> Result<EbayAuthStatus> {
        self.get("/api/ebay/auth/status").await
    }

    /// Fetch the OAuth audit log.
    pub async fn ebay_auth_log(&self) -> Result<Vec<EbayAuthLogEntry>> {
        self.get("/api/ebay/auth/log").await
    }
}
