//! Listing offer domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A published or unpublished listing offer for a SKU.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Offer {
    pub offer_id: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub listing_id: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub available_quantity: Option<u32>,
    /// e.g. "PUBLISHED", "UNPUBLISHED", "ENDED"
    #[serde(default)]
    pub status: Option<String>,
}
