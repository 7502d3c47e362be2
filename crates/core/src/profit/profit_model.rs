//! Model profitability domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the per-model profitability table. Computed by the backend;
/// read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ModelProfit {
    pub model: String,
    #[serde(default)]
    pub units_sold: u64,
    #[serde(default)]
    pub revenue: Decimal,
    #[serde(default)]
    pub cost: Decimal,
    #[serde(default)]
    pub profit: Decimal,
    /// Percentage, e.g. 34.5 for a 34.5% margin.
    #[serde(default)]
    pub margin_pct: Option<Decimal>,
}
