//! Baydesk Connect - REST client for the back-office API.
//!
//! This crate talks to the external back-office backend: typed endpoint
//! surfaces per area, a bearer-token authorization capability, and the
//! sync coordinator that drives trigger -> poll -> refresh runs.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod sync;

// Re-export commonly used types
pub use auth::{StaticToken, TokenProvider};
pub use client::BackofficeApiClient;
pub use sync::{SyncBackend, SyncCoordinator, SyncRefresh, SyncReport, SyncTarget};
