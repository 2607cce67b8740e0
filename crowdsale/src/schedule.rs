//! Deadline gate
//!
//! The sale is open through its deadline inclusive. The gate is a pure
//! comparison against a caller-supplied `now`; no clock is read on the
//! purchase path.

use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SaleSchedule {
    deadline: u64,
}

impl SaleSchedule {
    /// `deadline` is an absolute unix timestamp in seconds, immutable after
    /// construction.
    pub fn new(deadline: u64) -> Self {
        Self { deadline }
    }

    pub fn deadline(&self) -> u64 {
        self.deadline
    }

    /// A request arriving exactly at the deadline is still accepted.
    pub fn is_open(&self, now: u64) -> bool {
        now <= self.deadline
    }

    /// Seconds until the deadline, 0 once passed. View-layer convenience.
    pub fn remaining(&self, now: u64) -> u64 {
        self.deadline.saturating_sub(now)
    }
}

/// Absolute deadline `days` from wall-clock now. Deployment/test helper,
/// never called on the purchase path.
pub fn deadline_after_days(days: u64) -> u64 {
    chrono::Utc::now().timestamp() as u64 + days * SECONDS_PER_DAY
}
