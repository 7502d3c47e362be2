//! eBay OAuth link domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current state of the eBay OAuth link.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct EbayAuthStatus {
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub ebay_user: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub token_expires_at: Option<DateTime<Utc>>,
}

/// Response to a connect request: the consent URL the user must open.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EbayConnectResponse {
    pub authorize_url: String,
}

/// One entry of the OAuth audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EbayAuthLogEntry {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// e.g. "token_refreshed", "connected", "refresh_failed"
    pub event: String,
    #[serde(default)]
    pub detail: Option<String>,
}
