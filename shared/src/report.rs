//! Run report types
//!
//! A `RunSummary` describes one completed grouping run and is what the
//! result sink writes next to the grouped table when asked to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DistributionMode, RunId, TrackingMode};

/// Counts and settings for one grouping run
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub mode: DistributionMode,
    pub tracking: TrackingMode,
    pub people_total: usize,
    pub heads_total: usize,
    /// Rows pairing a head with a member
    pub paired_rows: usize,
    /// Rows carrying only a status message
    pub status_rows: usize,
    /// People the grouped pass could not place and handed to round-robin
    pub unplaced_after_grouping: usize,
    pub rows_written: usize,
}

impl RunSummary {
    pub fn new(run_id: RunId, mode: DistributionMode, tracking: TrackingMode) -> Self {
        Self {
            run_id,
            generated_at: Utc::now(),
            mode,
            tracking,
            people_total: 0,
            heads_total: 0,
            paired_rows: 0,
            status_rows: 0,
            unplaced_after_grouping: 0,
            rows_written: 0,
        }
    }

    /// True when no row pairs anybody with a head
    pub fn is_empty(&self) -> bool {
        self.paired_rows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_modes_lowercase() {
        let mut summary = RunSummary::new(RunId::new(), DistributionMode::Grouped, TrackingMode::Position);
        summary.paired_rows = 3;

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["mode"], "grouped");
        assert_eq!(json["tracking"], "position");
        assert_eq!(json["paired_rows"], 3);
        assert!(!summary.is_empty());
    }
}
