//! Baydesk Core - Domain entities and the sync-job lifecycle.
//!
//! This crate contains the backend-agnostic domain layer for Baydesk.
//! Every entity here is a read-only snapshot owned by the external
//! back-office API; mutations go through `baydesk-connect` and are
//! followed by a wholesale re-fetch of the affected collection.

pub mod constants;
pub mod disputes;
pub mod ebay;
pub mod errors;
pub mod financials;
pub mod inventory;
pub mod offers;
pub mod orders;
pub mod policies;
pub mod profit;
pub mod rules;
pub mod sync;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
