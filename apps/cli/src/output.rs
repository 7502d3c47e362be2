//! Plain-text rendering helpers for tables and figures.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use baydesk_core::financials::FinancialSummary;

/// Print rows as aligned columns. Prints "(none)" when there are no rows.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        println!("(none)");
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    println!("{}", format_row(headers.iter().map(|h| h.to_string()), &widths));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in rows {
        println!("{}", format_row(row.iter().cloned(), &widths));
    }
}

fn format_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

pub fn fmt_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

pub fn fmt_decimal(value: &Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn fmt_datetime(value: &Option<DateTime<Utc>>) -> String {
    value
        .map(|v| v.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

pub fn print_financial_summary(summary: &FinancialSummary) {
    let currency = summary.currency.as_deref().unwrap_or("");
    println!("gross sales:  {} {}", summary.gross_sales, currency);
    println!("fees:         {} {}", summary.fees, currency);
    println!("refunds:      {} {}", summary.refunds, currency);
    println!("net proceeds: {} {}", summary.net_proceeds, currency);
    println!("transactions: {}", summary.transaction_count);
    if let Some(at) = summary.last_synced_at {
        println!("last synced:  {}", at.format("%Y-%m-%d %H:%M"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_alignment() {
        let widths = vec![6, 3];
        let row = format_row(
            vec!["ord-1".to_string(), "2".to_string()].into_iter(),
            &widths,
        );
        assert_eq!(row, "ord-1   2");
    }

    #[test]
    fn test_fmt_opt_empty_for_none() {
        let value: Option<String> = None;
        assert_eq!(fmt_opt(&value), "");
        assert_eq!(fmt_opt(&Some("x")), "x");
    }

    #[test]
    fn test_fmt_decimal() {
        assert_eq!(fmt_decimal(&Some(Decimal::new(2499, 2))), "24.99");
        assert_eq!(fmt_decimal(&None), "");
    }
}
