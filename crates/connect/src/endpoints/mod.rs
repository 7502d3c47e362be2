//! Typed endpoint surfaces, grouped per back-office area.
//!
//! Every method fetches or mutates one resource and returns domain types
//! from `baydesk-core`. Mutation callers re-fetch the affected collection
//! afterwards instead of patching locally.

mod admin;
mod disputes;
mod ebay_auth;
mod financials;
mod inventory;
mod offers;
mod orders;
mod policies;
mod transactions;
