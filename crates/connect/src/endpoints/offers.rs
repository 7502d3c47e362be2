//! Offers endpoints.

use baydesk_core::errors::Result;
use baydesk_core::offers::Offer;

use crate::client::BackofficeApiClient;

impl BackofficeApiClient {
    /// Fetch all listing offers.
    pub async fn list_offers(&self) -> Result<Vec<Offer>> {
        self.get("/api/ebay/offers").await
    }
}
