//! Orders module - domain models.

mod orders_model;

pub use orders_model::{Order, OrderFilter, OrderLineItem};
