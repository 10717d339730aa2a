//! Isolation-based candidate picking
//!
//! When an event has several candidate combinations, the analysis keeps the
//! one whose tau (or tau pair) is best isolated. Each final state has its own
//! scoring formula over the raw isolation-discriminant arrays; the picker
//! returns the slot with the highest score.

use crate::types::{EventRecord, Result, SelectError, TauLeptonLeptonEvent, TauTauLeptonEvent};

/// Selection of the best-isolated candidate slot
pub trait IsoPicker {
    /// Pick the candidate slot with the highest isolation score
    ///
    /// Ties break to the first maximal slot in input order. Non-finite
    /// scores never displace the incumbent.
    ///
    /// # Arguments
    /// * `event` - Per-event record of the final state this picker expects
    /// * `candidates` - Non-empty ordered list of candidate slots to compare
    ///
    /// # Returns
    /// * `Ok(slot)` - A member of `candidates` maximizing the score
    /// * `Err(FinalStateMismatch)` - Record has a different layout
    /// * `Err(NoCandidates)` - `candidates` is empty
    /// * `Err(CandidateOutOfRange)` - A slot exceeds the record's arrays
    fn pick(&self, event: &EventRecord, candidates: &[usize]) -> Result<usize>;
}

/// Picker for the tau-tau-lepton final state
///
/// Scores a slot by the composite `(tau1_raw + 1)^2 + (tau2_raw + 1)^2`, a
/// monotonic combination favoring higher raw isolation on both taus.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiTauIsoPicker;

/// Picker for the tau-lepton-lepton final state
///
/// Scores a slot by the raw isolation discriminant of its single tau.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleTauIsoPicker;

fn ditau_iso(event: &TauTauLeptonEvent, slot: usize) -> f64 {
    let t1 = event.tau1_iso[slot] + 1.0;
    let t2 = event.tau2_iso[slot] + 1.0;
    t1 * t1 + t2 * t2
}

fn tau_iso(event: &TauLeptonLeptonEvent, slot: usize) -> f64 {
    event.tau_iso[slot]
}

/// Return the first candidate maximizing `score`, checking every slot
/// against `len` before it is scored.
fn pick_by_score<F>(candidates: &[usize], len: usize, score: F) -> Result<usize>
where
    F: Fn(usize) -> f64,
{
    let (&first, rest) = candidates.split_first().ok_or(SelectError::NoCandidates)?;
    if first >= len {
        return Err(SelectError::CandidateOutOfRange { index: first, len });
    }

    let mut best = first;
    let mut best_score = score(first);
    for &slot in rest {
        if slot >= len {
            return Err(SelectError::CandidateOutOfRange { index: slot, len });
        }
        let s = score(slot);
        // Strictly greater: the earliest maximal slot wins ties, and NaN
        // never replaces the incumbent.
        if s > best_score {
            best = slot;
            best_score = s;
        }
    }

    log::trace!("picked slot {} with score {}", best, best_score);
    Ok(best)
}

impl IsoPicker for DiTauIsoPicker {
    fn pick(&self, event: &EventRecord, candidates: &[usize]) -> Result<usize> {
        let ev = event.as_tau_tau_lepton()?;
        pick_by_score(candidates, ev.n_candidates(), |slot| ditau_iso(ev, slot))
    }
}

impl IsoPicker for SingleTauIsoPicker {
    fn pick(&self, event: &EventRecord, candidates: &[usize]) -> Result<usize> {
        let ev = event.as_tau_lepton_lepton()?;
        pick_by_score(candidates, ev.n_candidates(), |slot| tau_iso(ev, slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_tau_event(tau_iso: Vec<f64>) -> EventRecord {
        EventRecord::TauLeptonLepton(TauLeptonLeptonEvent {
            higgs_decay_mode: 15,
            tau_iso,
        })
    }

    fn ditau_event(tau1_iso: Vec<f64>, tau2_iso: Vec<f64>) -> EventRecord {
        EventRecord::TauTauLepton(TauTauLeptonEvent {
            higgs_decay_mode: 15,
            tau1_iso,
            tau2_iso,
        })
    }

    #[test]
    fn test_single_tau_picks_highest_raw_score() {
        let event = single_tau_event(vec![0.2, 0.9, 0.5]);
        let picked = SingleTauIsoPicker.pick(&event, &[0, 1, 2]).unwrap();
        assert_eq!(picked, 1);
    }

    #[test]
    fn test_single_tau_respects_candidate_subset() {
        // Slot 1 has the best score overall but is not offered.
        let event = single_tau_event(vec![0.2, 0.9, 0.5]);
        let picked = SingleTauIsoPicker.pick(&event, &[0, 2]).unwrap();
        assert_eq!(picked, 2);
    }

    #[test]
    fn test_ditau_composite_beats_raw_sum() {
        // (0.1, 0.1) -> 1.21 + 1.21 = 2.42
        // (0.5, -0.2) -> 2.25 + 0.64 = 2.89
        let event = ditau_event(vec![0.1, 0.5], vec![0.1, -0.2]);
        let picked = DiTauIsoPicker.pick(&event, &[0, 1]).unwrap();
        assert_eq!(picked, 1);
    }

    #[test]
    fn test_ditau_negative_raw_values() {
        // Raw MVA outputs live in [-1, 1]; (-1, -1) scores exactly zero.
        let event = ditau_event(vec![-1.0, 0.0], vec![-1.0, 0.0]);
        let picked = DiTauIsoPicker.pick(&event, &[0, 1]).unwrap();
        assert_eq!(picked, 1);
    }

    #[test]
    fn test_tie_breaks_to_first_in_input_order() {
        let event = single_tau_event(vec![0.7, 0.7, 0.7]);
        assert_eq!(SingleTauIsoPicker.pick(&event, &[2, 0, 1]).unwrap(), 2);
        assert_eq!(SingleTauIsoPicker.pick(&event, &[1, 2]).unwrap(), 1);
    }

    #[test]
    fn test_single_candidate_is_returned() {
        let event = single_tau_event(vec![0.2, 0.9]);
        assert_eq!(SingleTauIsoPicker.pick(&event, &[0]).unwrap(), 0);
    }

    #[test]
    fn test_picked_score_dominates_all_candidates() {
        let iso = vec![0.31, -0.44, 0.87, 0.12, 0.87];
        let event = single_tau_event(iso.clone());
        let candidates = [4, 3, 2, 1, 0];
        let picked = SingleTauIsoPicker.pick(&event, &candidates).unwrap();
        assert!(candidates.contains(&picked));
        for &slot in &candidates {
            assert!(iso[picked] >= iso[slot]);
        }
        // First maximal slot in input order: 4 precedes 2.
        assert_eq!(picked, 4);
    }

    #[test]
    fn test_empty_candidates_is_an_error() {
        let event = single_tau_event(vec![0.2]);
        let err = SingleTauIsoPicker.pick(&event, &[]).unwrap_err();
        assert!(matches!(err, SelectError::NoCandidates));
    }

    #[test]
    fn test_out_of_range_slot_is_an_error() {
        let event = single_tau_event(vec![0.2, 0.9]);
        let err = SingleTauIsoPicker.pick(&event, &[0, 5]).unwrap_err();
        match err {
            SelectError::CandidateOutOfRange { index, len } => {
                assert_eq!(index, 5);
                assert_eq!(len, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_final_state_is_an_error() {
        let event = single_tau_event(vec![0.2]);
        let err = DiTauIsoPicker.pick(&event, &[0]).unwrap_err();
        assert!(matches!(err, SelectError::FinalStateMismatch { .. }));

        let event = ditau_event(vec![0.2], vec![0.3]);
        let err = SingleTauIsoPicker.pick(&event, &[0]).unwrap_err();
        assert!(matches!(err, SelectError::FinalStateMismatch { .. }));
    }

    #[test]
    fn test_nan_score_never_displaces_incumbent() {
        let event = single_tau_event(vec![0.3, f64::NAN, 0.1]);
        assert_eq!(SingleTauIsoPicker.pick(&event, &[0, 1, 2]).unwrap(), 0);
        // No comparison against NaN is strictly greater, so a NaN incumbent
        // also stays.
        assert_eq!(SingleTauIsoPicker.pick(&event, &[1, 2]).unwrap(), 1);
    }
}
