//! Event-category splitting
//!
//! A splitter decides whether an event belongs in a given analysis category.
//! Splitters are stateless predicates over a candidate slot of an event
//! record; the event loop applies them before any per-candidate selection.

use crate::types::EventRecord;

/// Predicate routing events into an analysis category
pub trait Splitter {
    /// Decide whether the given candidate slot of an event belongs in this
    /// splitter's category
    ///
    /// # Arguments
    /// * `event` - Per-event record
    /// * `candidate` - Candidate combination slot (ignored by splitters that
    ///   cut on per-event scalars)
    fn use_event(&self, event: &EventRecord, candidate: usize) -> bool;
}

/// Splitter selecting inclusive signal events by generator decay mode
///
/// Accepts an event iff its Higgs decay mode equals the configured mode,
/// independent of the candidate slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InclusiveSignalSplitter {
    mode: i32,
}

impl InclusiveSignalSplitter {
    /// Create a splitter accepting events with the given decay mode
    pub fn new(mode: i32) -> Self {
        Self { mode }
    }
}

impl Splitter for InclusiveSignalSplitter {
    fn use_event(&self, event: &EventRecord, _candidate: usize) -> bool {
        event.higgs_decay_mode() == self.mode
    }
}
