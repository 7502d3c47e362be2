//! Business-policy mapping domain models.
//!
//! A policy mapping associates an internal shipping-group/type
//! classification with the marketplace's business-policy identifiers
//! (fulfillment, payment, return). Mappings are stored by the backend;
//! the `seed` and `apply-to-skus` bulk actions run there too.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A stored policy mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PolicyMapping {
    pub id: i64,
    pub shipping_group: String,
    pub shipping_type: String,
    #[serde(default)]
    pub fulfillment_policy_id: Option<String>,
    #[serde(default)]
    pub payment_policy_id: Option<String>,
    #[serde(default)]
    pub return_policy_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating a policy mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewPolicyMapping {
    pub shipping_group: String,
    pub shipping_type: String,
    #[serde(default)]
    pub fulfillment_policy_id: Option<String>,
    #[serde(default)]
    pub payment_policy_id: Option<String>,
    #[serde(default)]
    pub return_policy_id: Option<String>,
}

impl NewPolicyMapping {
    /// Both classification fields are required; policy ids may be filled
    /// in later via `seed`.
    pub fn validate(&self) -> Result<()> {
        if self.shipping_group.trim().is_empty() {
            return Err(ValidationError::MissingField("shipping_group".to_string()).into());
        }
        if self.shipping_type.trim().is_empty() {
            return Err(ValidationError::MissingField("shipping_type".to_string()).into());
        }
        Ok(())
    }
}

/// Result of the backend `seed` bulk action.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct SeedOutcome {
    #[serde(default)]
    pub created: u32,
    #[serde(default)]
    pub skipped: u32,
}

/// Payload for the `apply-to-skus` bulk action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ApplySkusRequest {
    pub skus: Vec<String>,
    /// Re-apply even when the SKU already carries policy ids.
    #[serde(default)]
    pub overwrite: bool,
}

/// Result of the `apply-to-skus` bulk action.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct ApplySkusOutcome {
    #[serde(default)]
    pub updated: u32,
    #[serde(default)]
    pub missing: Vec<String>,
}
