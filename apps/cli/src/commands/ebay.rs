//! eBay account-link commands.

use baydesk_connect::BackofficeApiClient;

use crate::cli::EbayCommands;
use crate::output::{self, fmt_datetime, fmt_opt};

pub async fn run(command: EbayCommands, client: &BackofficeApiClient) -> anyhow::Result<()> {
    match command {
        EbayCommands::Connect => {
            let response = client.ebay_connect().await?;
            println!("open this URL to authorize the eBay account:");
            println!("{}", response.authorize_url);
            Ok(())
        }
        EbayCommands::Disconnect => {
            client.ebay_disconnect().await?;
            println!("eBay authorization dropped");
            Ok(())
        }
        EbayCommands::Status => {
            let status = client.ebay_auth_status().await?;
            println!(
                "connected: {}",
                if status.connected { "yes" } else { "no" }
            );
            if let Some(user) = &status.ebay_user {
                println!("ebay user: {}", user);
            }
            if !status.scopes.is_empty() {
                println!("scopes:    {}", status.scopes.join(" "));
            }
            if let Some(expires) = status.token_expires_at {
                println!("token expires: {}", expires.format("%Y-%m-%d %H:%M"));
            }
            Ok(())
        }
        EbayCommands::Log => {
            let entries = client.ebay_auth_log().await?;

            let rows: Vec<Vec<String>> = entries
                .iter()
                .map(|entry| {
                    vec![
                        fmt_datetime(&entry.timestamp),
                        entry.event.clone(),
                        fmt_opt(&entry.detail),
                    ]
                })
                .collect();
            output::print_table(&["time", "event", "detail"], &rows);
            Ok(())
        }
    }
}
