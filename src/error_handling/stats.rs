//! Import statistics tracking.
//!
//! Thread-safe counters for import outcomes, shared by all request handlers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ImportOutcome;

/// Thread-safe import statistics tracker.
///
/// Every [`ImportOutcome`] gets an atomic counter at construction time, so the
/// struct can be shared across handlers behind an `Arc` without locking.
pub struct ImportStats {
    outcomes: HashMap<ImportOutcome, AtomicUsize>,
}

impl ImportStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in ImportOutcome::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }
        ImportStats { outcomes }
    }

    /// Increment the counter for an outcome.
    pub fn record(&self, outcome: ImportOutcome) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to record outcome {:?} which is not in the map. \
                 This indicates a bug in ImportStats initialization.",
                outcome
            );
        }
    }

    /// Current count for an outcome.
    pub fn get(&self, outcome: ImportOutcome) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Total number of import requests seen, whatever their outcome.
    pub fn total(&self) -> usize {
        self.outcomes
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    /// Number of requests that did not succeed.
    pub fn total_failures(&self) -> usize {
        self.total()
            .saturating_sub(self.get(ImportOutcome::Succeeded))
    }
}

impl Default for ImportStats {
    fn default() -> Self {
        Self::new()
    }
}
