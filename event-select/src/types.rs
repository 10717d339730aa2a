//! Core types for the event selection library
//!
//! This module defines the per-event records the selectors read and the error
//! taxonomy. Records are flat, per-candidate arrays deserialized from ntuples
//! by the surrounding framework - this crate only reads them and never owns
//! the event loop.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, SelectError>;

/// Decay-channel layout of an event record
///
/// The final state fixes which per-candidate isolation arrays exist: two
/// hadronic taus plus one light lepton, or one hadronic tau plus two light
/// leptons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalState {
    /// Two hadronic taus and one light lepton
    TauTauLepton,
    /// One hadronic tau and two light leptons
    TauLeptonLepton,
}

impl fmt::Display for FinalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalState::TauTauLepton => write!(f, "tau-tau-lepton"),
            FinalState::TauLeptonLepton => write!(f, "tau-lepton-lepton"),
        }
    }
}

/// Errors that can occur during selection
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("Expected a {expected} record, got {found}")]
    FinalStateMismatch {
        expected: FinalState,
        found: FinalState,
    },

    #[error("Candidate list is empty")]
    NoCandidates,

    #[error("Candidate slot {index} out of range (record has {len} slots)")]
    CandidateOutOfRange { index: usize, len: usize },
}

/// Per-event record for the tau-tau-lepton final state
///
/// Each field with a per-candidate meaning is an array indexed by candidate
/// combination slot. The two isolation arrays run in parallel: slot `i` holds
/// the raw isolation-discriminant values of the leading and subleading tau of
/// combination `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct TauTauLeptonEvent {
    /// Generator-level Higgs decay mode of the event
    pub higgs_decay_mode: i32,
    /// Raw isolation discriminant of the leading tau, per candidate slot
    pub tau1_iso: Vec<f64>,
    /// Raw isolation discriminant of the subleading tau, per candidate slot
    pub tau2_iso: Vec<f64>,
}

impl TauTauLeptonEvent {
    /// Number of candidate combination slots in this record
    ///
    /// The two isolation arrays are expected to have equal length; if they
    /// disagree the shorter one bounds the usable slots.
    pub fn n_candidates(&self) -> usize {
        self.tau1_iso.len().min(self.tau2_iso.len())
    }
}

/// Per-event record for the tau-lepton-lepton final state
#[derive(Debug, Clone, PartialEq)]
pub struct TauLeptonLeptonEvent {
    /// Generator-level Higgs decay mode of the event
    pub higgs_decay_mode: i32,
    /// Raw isolation discriminant of the tau, per candidate slot
    pub tau_iso: Vec<f64>,
}

impl TauLeptonLeptonEvent {
    /// Number of candidate combination slots in this record
    pub fn n_candidates(&self) -> usize {
        self.tau_iso.len()
    }
}

/// Tagged per-event record - the input to all selectors
///
/// Replaces the unchecked downcast between final-state-specific accessors
/// with an explicit variant tag: selectors that need a specific layout go
/// through [`EventRecord::as_tau_tau_lepton`] or
/// [`EventRecord::as_tau_lepton_lepton`] and get a typed error on mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum EventRecord {
    TauTauLepton(TauTauLeptonEvent),
    TauLeptonLepton(TauLeptonLeptonEvent),
}

impl EventRecord {
    /// The final state this record was produced for
    pub fn final_state(&self) -> FinalState {
        match self {
            EventRecord::TauTauLepton(_) => FinalState::TauTauLepton,
            EventRecord::TauLeptonLepton(_) => FinalState::TauLeptonLepton,
        }
    }

    /// Generator-level Higgs decay mode (a per-event scalar, present in
    /// every final state)
    pub fn higgs_decay_mode(&self) -> i32 {
        match self {
            EventRecord::TauTauLepton(ev) => ev.higgs_decay_mode,
            EventRecord::TauLeptonLepton(ev) => ev.higgs_decay_mode,
        }
    }

    /// Number of candidate combination slots in this record
    pub fn n_candidates(&self) -> usize {
        match self {
            EventRecord::TauTauLepton(ev) => ev.n_candidates(),
            EventRecord::TauLeptonLepton(ev) => ev.n_candidates(),
        }
    }

    /// Checked access to the tau-tau-lepton layout
    pub fn as_tau_tau_lepton(&self) -> Result<&TauTauLeptonEvent> {
        match self {
            EventRecord::TauTauLepton(ev) => Ok(ev),
            other => Err(SelectError::FinalStateMismatch {
                expected: FinalState::TauTauLepton,
                found: other.final_state(),
            }),
        }
    }

    /// Checked access to the tau-lepton-lepton layout
    pub fn as_tau_lepton_lepton(&self) -> Result<&TauLeptonLeptonEvent> {
        match self {
            EventRecord::TauLeptonLepton(ev) => Ok(ev),
            other => Err(SelectError::FinalStateMismatch {
                expected: FinalState::TauLeptonLepton,
                found: other.final_state(),
            }),
        }
    }
}
