//! Policy mapping commands.
//!
//! Mutations re-fetch and re-render the full collection afterwards; the
//! backend owns the data.

use baydesk_connect::BackofficeApiClient;
use baydesk_core::policies::{ApplySkusRequest, NewPolicyMapping};

use crate::cli::PoliciesCommands;
use crate::output::{self, fmt_opt};

pub async fn run(command: PoliciesCommands, client: &BackofficeApiClient) -> anyhow::Result<()> {
    match command {
        PoliciesCommands::List => list(client).await,
        PoliciesCommands::Add {
            shipping_group,
            shipping_type,
            fulfillment,
            payment,
            returns,
        } => {
            let mapping = NewPolicyMapping {
                shipping_group,
                shipping_type,
                fulfillment_policy_id: fulfillment,
                payment_policy_id: payment,
                return_policy_id: returns,
            };
            let created = client.create_policy_mapping(&mapping).await?;
            println!("created mapping {}", created.id);
            list(client).await
        }
        PoliciesCommands::Remove { id } => {
            client.delete_policy_mapping(id).await?;
            println!("removed mapping {}", id);
            list(client).await
        }
        PoliciesCommands::Seed => {
            let outcome = client.seed_policy_mappings().await?;
            println!(
                "seeded {} mappings ({} already present)",
                outcome.created, outcome.skipped
            );
            list(client).await
        }
        PoliciesCommands::ApplySkus { skus, overwrite } => {
            let outcome = client
                .apply_policies_to_skus(&ApplySkusRequest { skus, overwrite })
                .await?;
            println!("updated {} SKUs", outcome.updated);
            if !outcome.missing.is_empty() {
                println!("no mapping matched: {}", outcome.missing.join(", "));
            }
            Ok(())
        }
    }
}

async fn list(client: &BackofficeApiClient) -> anyhow::Result<()> {
    let mappings = client.list_policy_mappings().await?;

    let rows: Vec<Vec<String>> = mappings
        .iter()
        .map(|m| {
            vec![
                m.id.to_string(),
                m.shipping_group.clone(),
                m.shipping_type.clone(),
                fmt_opt(&m.fulfillment_policy_id),
                fmt_opt(&m.payment_policy_id),
                fmt_opt(&m.return_policy_id),
            ]
        })
        .collect();
    output::print_table(
        &["id", "group", "type", "fulfillment", "payment", "return"],
        &rows,
    );
    Ok(())
}
