//! Financials commands.

use baydesk_connect::{BackofficeApiClient, SyncTarget};

use super::{render_sync_report, sync_coordinator};
use crate::cli::FinancialsCommands;
use crate::output;

pub async fn run(command: FinancialsCommands, client: &BackofficeApiClient) -> anyhow::Result<()> {
    match command {
        FinancialsCommands::Summary => {
            let summary = client.get_financials_summary().await?;
            output::print_financial_summary(&summary);
            Ok(())
        }
        FinancialsCommands::Sync { no_watch } => {
            if no_watch {
                let triggered = client.start_financials_sync().await?;
                println!("financials sync queued (job {})", triggered.job_id);
                return Ok(());
            }
            let report = sync_coordinator(client).run(SyncTarget::Financials).await?;
            render_sync_report(report)
        }
    }
}
