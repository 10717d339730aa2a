//! Event Selection Library
//!
//! Stateless decision helpers for a flat-ntuple event-analysis loop: routing
//! events into analysis categories and picking the best-isolated tau
//! candidate among several combinations.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on per-event decisions:
//! - Splits events into categories by generator decay mode
//! - Picks the best-isolated candidate slot per final state
//! - Models event records as a tagged enum, so a selector asking for the
//!   wrong final-state layout gets a typed error instead of undefined
//!   behavior
//!
//! The library does NOT:
//! - Read or write ntuple files
//! - Run the event loop
//! - Fill histograms or drive any downstream pipeline
//!
//! All of that lives in the surrounding analysis framework, which owns the
//! event records and calls in here once per event.
//!
//! # Example Usage
//!
//! ```
//! use event_select::{
//!     EventRecord, FinalState, SelectionConfig, TauTauLeptonEvent,
//! };
//!
//! // One selection pass over a di-tau signal sample
//! let config = SelectionConfig::new(FinalState::TauTauLepton)
//!     .with_signal_decay_mode(15);
//! let splitter = config.splitter().unwrap();
//! let picker = config.picker();
//!
//! let event = EventRecord::TauTauLepton(TauTauLeptonEvent {
//!     higgs_decay_mode: 15,
//!     tau1_iso: vec![0.1, 0.5],
//!     tau2_iso: vec![0.1, -0.2],
//! });
//!
//! if splitter.use_event(&event, 0) {
//!     let best = picker.pick(&event, &[0, 1]).unwrap();
//!     assert_eq!(best, 1);
//! }
//! ```

// Public modules
pub mod config;
pub mod picker;
pub mod splitter;
pub mod types;

// Re-export main types for convenience
pub use config::SelectionConfig;
pub use picker::{DiTauIsoPicker, IsoPicker, SingleTauIsoPicker};
pub use splitter::{InclusiveSignalSplitter, Splitter};
pub use types::{
    EventRecord, FinalState, Result, SelectError, TauLeptonLeptonEvent, TauTauLeptonEvent,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
