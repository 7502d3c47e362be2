//! Command handlers, one module per back-office area.

mod auth;
mod catalog;
mod ebay;
mod financials;
mod orders;
mod policies;
mod rules;
mod transactions;

use std::sync::Arc;

use baydesk_connect::{BackofficeApiClient, SyncCoordinator, SyncRefresh, SyncReport};
use baydesk_core::sync::{PollConfig, PollOutcome};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output;
use crate::progress::CliProgressListener;
use crate::token_store::FileTokenStore;

pub async fn dispatch(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let store = Arc::new(FileTokenStore::new(config.token_file.clone()));
    let api_url = cli.api_url.as_deref().unwrap_or(&config.api_url);

    // The token is read per request, so building the client does not
    // require one to exist yet.
    let client = BackofficeApiClient::new(api_url, store.clone())?;

    match cli.command {
        Commands::Auth { command } => auth::run(command, &store),
        Commands::Financials { command } => financials::run(command, &client).await,
        Commands::Transactions { command } => transactions::run(command, &client).await,
        Commands::Orders { command } => orders::run(command, &client).await,
        Commands::Disputes => catalog::disputes(&client).await,
        Commands::Offers => catalog::offers(&client).await,
        Commands::Inventory => catalog::inventory(&client).await,
        Commands::Policies { command } => policies::run(command, &client).await,
        Commands::Rules { command } => rules::run(command, &client).await,
        Commands::Profit => rules::profit(&client).await,
        Commands::Ebay { command } => ebay::run(command, &client).await,
    }
}

/// One coordinator per invocation; the CLI is single-shot, so the
/// in-flight guard only matters within a watch run.
pub(crate) fn sync_coordinator(client: &BackofficeApiClient) -> SyncCoordinator {
    SyncCoordinator::new(
        Arc::new(client.clone()),
        Arc::new(CliProgressListener::default()),
        PollConfig::default(),
    )
}

/// Render a finished sync run: a success line with duration and record
/// count plus the refreshed figures, or the failure detail.
pub(crate) fn render_sync_report(report: SyncReport) -> anyhow::Result<()> {
    match &report.outcome {
        PollOutcome::Success(job) => {
            println!(
                "{} sync completed in {} ms ({} records stored)",
                report.target,
                job.duration_ms.unwrap_or(report.elapsed.as_millis() as u64),
                job.records_stored.unwrap_or(0),
            );
            match report.refreshed {
                Some(SyncRefresh::Financials(summary)) => {
                    println!();
                    output::print_financial_summary(&summary);
                }
                Some(SyncRefresh::Transactions(transactions)) => {
                    println!("{} transactions after refresh", transactions.len());
                }
                None => {}
            }
            Ok(())
        }
        PollOutcome::Error(job) => {
            anyhow::bail!("{} sync failed: {}", report.target, job.error_message())
        }
        PollOutcome::TimedOut { waited } => anyhow::bail!(
            "{} sync did not finish within {:.0?}; it may still be running",
            report.target,
            waited
        ),
    }
}
