//! Transactions module - domain models.

mod transactions_model;

pub use transactions_model::{Transaction, TransactionFilter};

#[cfg(test)]
mod transactions_model_tests;
