//! Daily call budget enforcement.
//!
//! Walmart IO grants a fixed number of calls per day (5000 by default).
//! [`QuotaGate`] tracks how many remain in the current 24 hour window and
//! decides whether a call may go out. What happens to a denied call is
//! decided by the client's [`QuotaPolicy`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default number of calls granted per day.
pub const DEFAULT_DAILY_CALLS: u32 = 5000;

/// Remaining call count at which a low quota warning is logged.
pub const LOW_QUOTA_THRESHOLD: u32 = 500;

/// What the client does when the daily budget is exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaPolicy {
    /// Reject the call with [`WalmartError::QuotaExceeded`](crate::WalmartError::QuotaExceeded)
    /// before any network I/O.
    #[default]
    Fail,
    /// Log a warning and send the request anyway.
    WarnAndProceed,
}

/// Remaining-calls counter over a rolling 24 hour window.
///
/// # Example
///
/// ```rust
/// use walmart_io::quota::QuotaGate;
/// use chrono::{Duration, Utc};
///
/// let now = Utc::now();
/// let mut gate = QuotaGate::new(2, now);
///
/// assert!(gate.admit(now));
/// assert!(gate.admit(now));
/// assert!(!gate.admit(now));
///
/// // Once the window has passed, the budget is restored.
/// assert!(gate.admit(now + Duration::hours(25)));
/// assert_eq!(gate.remaining(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuotaGate {
    daily_limit: u32,
    remaining: u32,
    resets_at: DateTime<Utc>,
}

impl QuotaGate {
    /// Length of the quota window.
    #[must_use]
    pub fn window() -> Duration {
        Duration::hours(24)
    }

    /// Creates a gate with a full budget whose window starts at `now`.
    #[must_use]
    pub fn new(daily_limit: u32, now: DateTime<Utc>) -> Self {
        Self {
            daily_limit,
            remaining: daily_limit,
            resets_at: now + Self::window(),
        }
    }

    /// Attempts to consume one call at time `now`.
    ///
    /// Returns `true` and decrements the counter when a call is available.
    /// Returns `false` without touching the counter when the budget is
    /// exhausted.
    pub fn admit(&mut self, now: DateTime<Utc>) -> bool {
        if now > self.resets_at {
            self.remaining = self.daily_limit;
            self.resets_at = now + Self::window();
            tracing::debug!(
                "Daily call budget reset to {}, next reset at {}",
                self.daily_limit,
                self.resets_at
            );
        }

        if self.remaining == 0 {
            return false;
        }

        self.remaining -= 1;
        if self.remaining == LOW_QUOTA_THRESHOLD {
            tracing::warn!("{LOW_QUOTA_THRESHOLD} calls remain for the day");
        }
        true
    }

    /// Returns the number of calls left in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns the configured daily limit.
    #[must_use]
    pub const fn daily_limit(&self) -> u32 {
        self.daily_limit
    }

    /// Returns when the budget is next restored.
    #[must_use]
    pub const fn resets_at(&self) -> DateTime<Utc> {
        self.resets_at
    }
}
