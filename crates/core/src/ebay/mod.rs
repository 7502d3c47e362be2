//! eBay account-link module - domain models.

mod ebay_model;

pub use ebay_model::{EbayAuthLogEntry, EbayAuthStatus, EbayConnectResponse};
