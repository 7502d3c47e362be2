//! Tests for transaction models.

use super::transactions_model::{Transaction, TransactionFilter};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[test]
fn test_default_filter_query_has_paging_only() {
    let filter = TransactionFilter::default();
    let query = filter.to_query();

    assert_eq!(
        query,
        vec![
            ("limit", "200".to_string()),
            ("offset", "0".to_string()),
        ]
    );
}

#[test]
fn test_full_filter_query() {
    let filter = TransactionFilter {
        transaction_type: Some("REFUND".to_string()),
        date_from: NaiveDate::from_ymd_opt(2024, 3, 1),
        date_to: NaiveDate::from_ymd_opt(2024, 3, 31),
        limit: 50,
        offset: 100,
    };

    let query = filter.to_query();

    assert_eq!(
        query,
        vec![
            ("limit", "50".to_string()),
            ("offset", "100".to_string()),
            ("transaction_type", "REFUND".to_string()),
            ("date_from", "2024-03-01".to_string()),
            ("date_to", "2024-03-31".to_string()),
        ]
    );
}

#[test]
fn test_transaction_deserialization() {
    let tx: Transaction = serde_json::from_str(
        r#"{
            "transaction_id": "tx-100",
            "transaction_type": "SALE",
            "order_id": "ord-7",
            "amount": 24.99,
            "fee": 3.12,
            "currency": "USD",
            "booked_at": "2024-03-05T14:30:00Z"
        }"#,
    )
    .unwrap();

    assert_eq!(tx.transaction_id, "tx-100");
    assert_eq!(tx.transaction_type.as_deref(), Some("SALE"));
    assert_eq!(tx.amount, Some(Decimal::new(2499, 2)));
    assert_eq!(tx.fee, Some(Decimal::new(312, 2)));
    assert!(tx.payout_id.is_none());
}

#[test]
fn test_sparse_transaction_deserialization() {
    let tx: Transaction = serde_json::from_str(r#"{"transaction_id":"tx-1"}"#).unwrap();

    assert_eq!(tx.transaction_id, "tx-1");
    assert!(tx.transaction_type.is_none());
    assert!(tx.amount.is_none());
    assert!(tx.booked_at.is_none());
}
