//! Disputes module - domain models.

mod disputes_model;

pub use disputes_model::Dispute;
