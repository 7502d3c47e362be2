//! Order domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single purchased line within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrderLineItem {
    #[serde(default)]
    pub sku: Option<String>,
    pub title: String,
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
}

/// A marketplace order as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Order {
    pub order_id: String,
    #[serde(default)]
    pub buyer_username: Option<String>,
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub order_status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub fulfillment_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Number of units across all line items.
    pub fn unit_count(&self) -> u32 {
        self.line_items.iter().map(|li| li.quantity).sum()
    }
}

/// Filter inputs for the orders view. Rebuilt into query parameters on
/// every apply-filter action; `None` fields are omitted from the query.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub buyer: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl OrderFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.buyer.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Query parameters in wire order.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(v) = &self.status {
            params.push(("status", v.clone()));
        }
        if let Some(v) = &self.buyer {
            params.push(("buyer", v.clone()));
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
