//! Inventory module - domain models.

mod inventory_model;

pub use inventory_model::InventoryItem;
