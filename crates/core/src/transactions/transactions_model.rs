//! Transaction domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_LIMIT;

/// A financial transaction (sale, refund, fee, payout) as booked by the
/// marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    pub transaction_id: String,
    /// e.g. "SALE", "REFUND", "NON_SALE_CHARGE", "PAYOUT"
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub fee: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payout_id: Option<String>,
    #[serde(default)]
    pub booked_at: Option<DateTime<Utc>>,
}

/// Filter inputs for the transactions view.
#[derive(Debug, Clone)]
pub struct TransactionFilter {
    pub transaction_type: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self {
            transaction_type: None,
            date_from: None,
            date_to: None,
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl TransactionFilter {
    /// Query parameters in wire order. Paging is always present; optional
    /// filters are omitted when unset.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(v) = &self.transaction_type {
            params.push(("transaction_type", v.clone()));
        }
        if let Some(v) = self.date_from {
            params.push(("date_from", v.format("%Y-%m-%d").to_string()));
        }
        if let Some(v) = self.date_to {
            params.push(("date_to", v.format("%Y-%m-%d").to_string()));
        }
        params
    }
}
