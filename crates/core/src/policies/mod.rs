//! Policy mappings module - domain models.

mod policies_model;

pub use policies_model::{
    ApplySkusOutcome, ApplySkusRequest, NewPolicyMapping, PolicyMapping, SeedOutcome,
};

#[cfg(test)]
mod policies_model_tests;
