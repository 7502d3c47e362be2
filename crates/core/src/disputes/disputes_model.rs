//! Payment dispute domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A buyer payment dispute. The marketplace owns the dispute lifecycle;
/// this is a display snapshot only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Dispute {
    pub dispute_id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    /// e.g. "ITEM_NOT_RECEIVED", "SIGNIFICANTLY_NOT_AS_DESCRIBED"
    #[serde(default)]
    pub reason: Option<String>,
    /// e.g. "OPEN", "ACTION_NEEDED", "CLOSED"
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub respond_by: Option<DateTime<Utc>>,
}
