//! AI rule domain models.
//!
//! Rules are authored as natural-language prompts; the backend generates
//! the SQL and owns both storage and execution. Preview runs the generated
//! SQL against live data without saving the rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A stored rule with its backend-generated SQL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AiRule {
    pub id: String,
    pub name: String,
    /// The natural-language prompt the rule was authored from.
    pub prompt: String,
    #[serde(default)]
    pub sql: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_enabled() -> bool {
    true
}

/// Payload for creating or previewing a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewAiRule {
    pub name: String,
    pub prompt: String,
}

impl NewAiRule {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::MissingField("prompt".to_string()).into());
        }
        Ok(())
    }
}

/// Result of a preview run: the generated SQL plus a sample of matching
/// rows so the author can sanity-check before saving.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RulePreview {
    pub sql: String,
    #[serde(default)]
    pub sample_rows: Vec<serde_json::Value>,
    #[serde(default)]
    pub row_count: Option<u64>,
}
