//! Admin AI endpoints: rule authoring and the profitability table.

use baydesk_core::errors::Result;
use baydesk_core::profit::ModelProfit;
use baydesk_core::rules::{AiRule, NewAiRule, RulePreview};

use crate::client::BackofficeApiClient;

impl BackofficeApiClient {
    /// Fetch all stored AI rules.
    pub async fn list_ai_rules(&self) -> Result<Vec<AiRule>> {
        self.get("/api/admin/ai/rules").await
    }

    /// Create a rule; the backend generates and stores the SQL.
    pub async fn create_ai_rule(&self, rule: &NewAiRule) -> Result<AiRule> {
        rule.validate()?;
        self.post("/api/admin/ai/rules", rule).await
    }

    /// Preview a rule without saving: generated SQL plus sample rows.
    pub async fn preview_ai_rule(&self, rule: &NewAiRule) -> Result<RulePreview> {
        rule.validate()?;
        self.post("/api/admin/ai/rules/preview", rule).await
    }

    /// Fetch the per-model profitability table.
    pub async fn get_model_profits(&self) -> Result<Vec<ModelProfit>> {
        self.get("/api/admin/ai/profit/models").await
    }
}
