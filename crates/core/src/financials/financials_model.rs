//! Financial summary domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate financial figures across the synced transaction history.
/// Re-fetched wholesale after every successful financials sync.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct FinancialSummary {
    #[serde(default)]
    pub gross_sales: Decimal,
    #[serde(default)]
    pub fees: Decimal,
    #[serde(default)]
    pub refunds: Decimal,
    #[serde(default)]
    pub net_proceeds: Decimal,
    #[serde(default)]
    pub transaction_count: u64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub last_synced_at: Option<DateTime<Utc>>,
}
