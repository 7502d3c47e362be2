//! Sync-job domain models and the status poller.

mod job_model;
mod poller;

pub use job_model::*;
pub use poller::*;

#[cfg(test)]
mod tests;
