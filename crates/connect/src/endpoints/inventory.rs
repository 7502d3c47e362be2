//! Inventory endpoints.

use baydesk_core::errors::Result;
use baydesk_core::inventory::InventoryItem;

use crate::client::BackofficeApiClient;

impl BackofficeApiClient {
    /// Fetch the full inventory list.
    pub async fn list_inventory(&self) -> Result<Vec<InventoryItem>> {
        self.get("/api/inventory").await
    }
}
