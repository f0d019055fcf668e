//! Aggregated dashboard figures.

use serde::{Deserialize, Serialize};

/// Issue counters for the stats cards.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueStats {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
}

/// Pull request counters for the stats cards.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrStats {
    pub total: u32,
    pub merged: u32,
    /// Draft or open
    pub pending: u32,
}

/// One bar of the weekly activity chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyActivity {
    /// Abbreviated weekday, `Mon` through `Sun`
    pub day: String,
    /// Issues recorded that day
    pub issues: u32,
    /// Pull requests recorded that day
    pub prs: u32,
}
