//! Transactions commands.

use baydesk_connect::{BackofficeApiClient, SyncTarget};
use baydesk_core::transactions::TransactionFilter;

use super::{render_sync_report, sync_coordinator};
use crate::cli::TransactionsCommands;
use crate::output::{self, fmt_datetime, fmt_decimal, fmt_opt};

pub async fn run(
    command: TransactionsCommands,
    client: &BackofficeApiClient,
) -> anyhow::Result<()> {
    match command {
        TransactionsCommands::List {
            transaction_type,
            from,
            to,
            limit,
            offset,
        } => {
            let filter = TransactionFilter {
                transaction_type,
                date_from: from,
                date_to: to,
                limit,
                offset,
            };
            let transactions = client.list_transactions(&filter).await?;

            let rows: Vec<Vec<String>> = transactions
                .iter()
                .map(|tx| {
                    vec![
                        tx.transaction_id.clone(),
                        fmt_opt(&tx.transaction_type),
                        fmt_opt(&tx.order_id),
                        fmt_decimal(&tx.amount),
                        fmt_decimal(&tx.fee),
                        fmt_opt(&tx.currency),
                        fmt_datetime(&tx.booked_at),
                    ]
                })
                .collect();
            output::print_table(
                &["id", "type", "order", "amount", "fee", "ccy", "booked"],
                &rows,
            );
            Ok(())
        }
        TransactionsCommands::Sync { no_watch } => {
            if no_watch {
                let triggered = client.start_transactions_sync().await?;
                println!("transactions sync queued (job {})", triggered.job_id);
                return Ok(());
            }
            let report = sync_coordinator(client)
                .run(SyncTarget::Transactions)
                .await?;
            render_sync_report(report)
        }
    }
}
