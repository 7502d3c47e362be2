//! Inventory domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stocked item in the reseller's own store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InventoryItem {
    pub sku: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    /// e.g. "NEW", "USED_EXCELLENT", "FOR_PARTS"
    #[serde(default)]
    pub condition: Option<String>,
    /// Device model this SKU belongs to, used by the profitability table.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub listed: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
