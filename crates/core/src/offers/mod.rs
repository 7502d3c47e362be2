//! Offers module - domain models.

mod offers_model;

pub use offers_model::Offer;
