//! Orders commands.

use baydesk_connect::BackofficeApiClient;
use baydesk_core::orders::OrderFilter;

use crate::cli::OrdersCommands;
use crate::output::{self, fmt_datetime, fmt_decimal, fmt_opt};

pub async fn run(command: OrdersCommands, client: &BackofficeApiClient) -> anyhow::Result<()> {
    match command {
        OrdersCommands::List {
            status,
            buyer,
            from,
            to,
        } => {
            let filter = OrderFilter {
                status,
                buyer,
                date_from: from,
                date_to: to,
            };
            let orders = client.filter_orders(&filter).await?;

            let rows: Vec<Vec<String>> = orders
                .iter()
                .map(|order| {
                    vec![
                        order.order_id.clone(),
                        fmt_opt(&order.buyer_username),
                        order.unit_count().to_string(),
                        fmt_decimal(&order.total),
                        fmt_opt(&order.currency),
                        fmt_opt(&order.order_status),
                        fmt_datetime(&order.created_at),
                    ]
                })
                .collect();
            output::print_table(
                &["order", "buyer", "units", "total", "ccy", "status", "created"],
                &rows,
            );
            Ok(())
        }
        OrdersCommands::Export { path } => {
            let csv = client.export_orders_csv().await?;
            std::fs::write(&path, &csv)?;
            println!("wrote {} bytes to {}", csv.len(), path.display());
            Ok(())
        }
    }
}
