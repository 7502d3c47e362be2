//! Orders endpoints.

use baydesk_core::errors::Result;
use baydesk_core::orders::{Order, OrderFilter};

use crate::client::BackofficeApiClient;

impl BackofficeApiClient {
    /// Fetch the full order list.
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        self.get("/ebay/orders").await
    }

    /// Fetch orders matching the filter. Falls back to the unfiltered
    /// endpoint when every filter field is unset.
    pub async fn filter_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        if filter.is_empty() {
            return self.list_orders().await;
        }
        self.get_with_query("/ebay/orders/filter", &filter.to_query())
            .await
    }

    /// Download the full order export as CSV text.
    pub async fn export_orders_csv(&self) -> Result<String> {
        self.get_text("/ebay/export/all").await
    }
}
