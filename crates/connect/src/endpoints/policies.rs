//! Policy mapping endpoints.

use baydesk_core::errors::Result;
use baydesk_core::policies::{
    ApplySkusOutcome, ApplySkusRequest, NewPolicyMapping, PolicyMapping, SeedOutcome,
};

use crate::client::BackofficeApiClient;

const POLICY_MAPPINGS: &str = "/api/admin/ebay/policy-mappings";

impl BackofficeApiClient {
    /// Fetch all stored policy mappings.
    pub async fn list_policy_mappings(&self) -> Result<Vec<PolicyMapping>> {
        self.get(POLICY_MAPPINGS).await
    }

    /// Create a policy mapping. Validates locally before hitting the API.
    pub async fn create_policy_mapping(
        &self,
        mapping: &NewPolicyMapping,
    ) -> Result<PolicyMapping> {
        mapping.validate()?;
        self.post(POLICY_MAPPINGS, mapping).await
    }

    /// Delete a policy mapping by id.
    pub async fn delete_policy_mapping(&self, id: i64) -> Result<()> {
        self.delete(&format!("{}/{}", POLICY_MAPPINGS, id)).await
    }

    /// Ask the backend to seed default mappings from the marketplace's
    /// business policies.
    pub async fn seed_policy_mappings(&self) -> Result<SeedOutcome> {
        self.post_empty(&format!("{}/seed", POLICY_MAPPINGS)).await
    }

    /// Apply the stored mappings to the given SKUs.
    pub async fn apply_policies_to_skus(
        &self,
        request: &ApplySkusRequest,
    ) -> Result<ApplySkusOutcome> {
        self.post(&format!("{}/apply-to-skus", POLICY_MAPPINGS), request)
            .await
    }
}
