//! Financials module - domain models.

mod financials_model;

pub use financials_model::FinancialSummary;
