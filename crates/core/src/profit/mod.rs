//! Profitability module - domain models.

mod profit_model;

pub use profit_model::ModelProfit;
