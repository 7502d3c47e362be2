//! Read-only listing commands: disputes, offers, inventory.

use baydesk_connect::BackofficeApiClient;

use crate::output::{self, fmt_datetime, fmt_decimal, fmt_opt};

pub async fn disputes(client: &BackofficeApiClient) -> anyhow::Result<()> {
    let disputes = client.list_disputes().await?;

    let rows: Vec<Vec<String>> = disputes
        .iter()
        .map(|d| {
            vec![
                d.dispute_id.clone(),
                fmt_opt(&d.order_id),
                fmt_opt(&d.reason),
                fmt_opt(&d.state),
                fmt_decimal(&d.amount),
                fmt_datetime(&d.respond_by),
            ]
        })
        .collect();
    output::print_table(
        &["dispute", "order", "reason", "state", "amount", "respond by"],
        &rows,
    );
    Ok(())
}

pub async fn offers(client: &BackofficeApiClient) -> anyhow::Result<()> {
    let offers = client.list_offers().await?;

    let rows: Vec<Vec<String>> = offers
        .iter()
        .map(|o| {
            vec![
                o.offer_id.clone(),
                fmt_opt(&o.sku),
                fmt_opt(&o.listing_id),
                fmt_decimal(&o.price),
                fmt_opt(&o.available_quantity),
                fmt_opt(&o.status),
            ]
        })
        .collect();
    output::print_table(&["offer", "sku", "listing", "price", "qty", "status"], &rows);
    Ok(())
}

pub async fn inventory(client: &BackofficeApiClient) -> anyhow::Result<()> {
    let items = client.list_inventory().await?;

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                item.sku.clone(),
                fmt_opt(&item.title),
                item.quantity.to_string(),
                fmt_opt(&item.condition),
                fmt_opt(&item.model),
                if item.listed { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    output::print_table(
        &["sku", "title", "qty", "condition", "model", "listed"],
        &rows,
    );
    Ok(())
}
