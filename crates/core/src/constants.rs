//! Application-wide constants.

use std::time::Duration;

/// Interval between two status polls while a sync job is in flight.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Upper bound for the backoff delay after consecutive failed polls.
pub const POLL_MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Ceiling on the total time spent waiting for a sync job to go terminal.
pub const POLL_MAX_WAIT: Duration = Duration::from_secs(600);

/// Default page size for filtered collection requests.
pub const DEFAULT_PAGE_LIMIT: i64 = 200;
