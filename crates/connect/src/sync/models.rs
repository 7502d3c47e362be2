//! Models for sync coordination.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use baydesk_core::financials::FinancialSummary;
use baydesk_core::sync::PollOutcome;
use baydesk_core::transactions::Transaction;

/// A syncable back-office area. Each target has its own trigger, status,
/// and refresh endpoints but shares the one polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncTarget {
    Financials,
    Transactions,
}

impl std::fmt::Display for SyncTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncTarget::Financials => write!(f, "financials"),
            SyncTarget::Transactions => write!(f, "transactions"),
        }
    }
}

/// The aggregate data re-fetched after a successful sync.
#[derive(Debug, Clone)]
pub enum SyncRefresh {
    Financials(FinancialSummary),
    Transactions(Vec<Transaction>),
}

/// Outcome of one coordinated sync run.
#[derive(Debug)]
pub struct SyncReport {
    pub target: SyncTarget,
    pub outcome: PollOutcome,
    /// Present only when the job succeeded and the refresh itself worked.
    pub refreshed: Option<SyncRefresh>,
    /// Wall-clock time spent watching the job.
    pub elapsed: Duration,
}

impl SyncReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}
