//! Selection configuration types
//!
//! This module defines the minimal configuration a selection pass needs. The
//! selectors themselves are stateless - the configuration only names the
//! final state being analyzed and, for signal samples, the generator decay
//! mode to split on. The event loop builds its splitter and picker from here.

use serde::{Deserialize, Serialize};

use crate::picker::{DiTauIsoPicker, IsoPicker, SingleTauIsoPicker};
use crate::splitter::{InclusiveSignalSplitter, Splitter};
use crate::types::FinalState;

/// Configuration for one selection pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Final state the ntuple was produced for
    pub final_state: FinalState,

    /// Optional: route only events with this generator decay mode
    /// (signal samples; `None` for data and background)
    #[serde(default)]
    pub signal_decay_mode: Option<i32>,
}

impl SelectionConfig {
    /// Create a configuration for the given final state
    pub fn new(final_state: FinalState) -> Self {
        Self {
            final_state,
            signal_decay_mode: None,
        }
    }

    /// Builder method: split on a generator decay mode
    pub fn with_signal_decay_mode(mut self, mode: i32) -> Self {
        self.signal_decay_mode = Some(mode);
        self
    }

    /// The splitter this pass routes events through, if any
    pub fn splitter(&self) -> Option<Box<dyn Splitter>> {
        self.signal_decay_mode
            .map(|mode| Box::new(InclusiveSignalSplitter::new(mode)) as Box<dyn Splitter>)
    }

    /// The isolation picker matching this pass's final state
    pub fn picker(&self) -> Box<dyn IsoPicker> {
        match self.final_state {
            FinalState::TauTauLepton => Box::new(DiTauIsoPicker),
            FinalState::TauLeptonLepton => Box::new(SingleTauIsoPicker),
        }
    }
}
