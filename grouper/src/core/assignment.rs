//! Per-run assignment bookkeeping
//!
//! Remembers which people have been placed with a head. A ledger lives for
//! exactly one partition call and is dropped with it.

use std::collections::HashSet;

use shared::TrackingMode;

/// Set of people already placed in some association during one run
#[derive(Debug)]
pub struct AssignmentLedger<'a> {
    mode: TrackingMode,
    identifiers: HashSet<&'a str>,
    positions: HashSet<usize>,
}

impl<'a> AssignmentLedger<'a> {
    pub fn new(mode: TrackingMode) -> Self {
        Self {
            mode,
            identifiers: HashSet::new(),
            positions: HashSet::new(),
        }
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    /// Record a person as placed. Returns false if the person cannot be
    /// recorded: already placed, or (identifier mode) no identifier.
    pub fn claim(&mut self, position: usize, identifier: Option<&'a str>) -> bool {
        match self.mode {
            TrackingMode::Identifier => match identifier {
                Some(id) => self.identifiers.insert(id),
                None => false,
            },
            TrackingMode::Position => self.positions.insert(position),
        }
    }

    pub fn is_assigned(&self, position: usize, identifier: Option<&str>) -> bool {
        match self.mode {
            TrackingMode::Identifier => identifier.is_some_and(|id| self.identifiers.contains(id)),
            TrackingMode::Position => self.positions.contains(&position),
        }
    }

    pub fn assigned_count(&self) -> usize {
        match self.mode {
            TrackingMode::Identifier => self.identifiers.len(),
            TrackingMode::Position => self.positions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_mode_rejects_duplicates_and_missing() {
        let mut ledger = AssignmentLedger::new(TrackingMode::Identifier);

        assert!(ledger.claim(0, Some("p1")));
        assert!(!ledger.claim(1, Some("p1")));
        assert!(!ledger.claim(2, None));

        assert!(ledger.is_assigned(5, Some("p1")));
        assert!(!ledger.is_assigned(2, None));
        assert_eq!(ledger.assigned_count(), 1);
    }

    #[test]
    fn test_position_mode_ignores_identifiers() {
        let mut ledger = AssignmentLedger::new(TrackingMode::Position);

        assert!(ledger.claim(0, Some("p1")));
        assert!(ledger.claim(1, Some("p1")));
        assert!(ledger.claim(2, None));
        assert!(!ledger.claim(2, None));

        assert!(ledger.is_assigned(2, None));
        assert!(!ledger.is_assigned(3, Some("p1")));
        assert_eq!(ledger.assigned_count(), 3);
    }
}
