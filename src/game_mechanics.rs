//! Half-inning transition rules: base-runner advancement, outs, scoring.
//!
//! Runner positions count bases already taken: 1 = first, 2 = second,
//! 3 = third, >= 4 = reached home. A batter joins at 0 and advances with
//! the hit, so a single puts the batter on first. No two runners ever
//! occupy the same base (ties are not modeled).
//!
//! Scoring is settled in two places: a fly out credits the runner on third
//! inline (gated on the inning not ending with that out), and every other
//! home-reaching runner is credited by [`sweep_home`], which the engine
//! runs only while the inning is still live. A runner pushed across home
//! by the third out therefore never scores.

use crate::events::Event;

/// Mutable per-inning state, created fresh for every simulated inning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InningState {
    pub outs: u32,
    pub runs: u32,
    /// Occupied base positions, insertion order.
    pub runners: Vec<u8>,
}

impl InningState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bitmask of occupied bases 1..=3.
    fn occupancy(&self) -> u8 {
        self.runners
            .iter()
            .filter(|&&r| r <= 3)
            .fold(0u8, |mask, &r| mask | (1 << r))
    }

    fn remove_runner_at(&mut self, base: u8) -> bool {
        if let Some(i) = self.runners.iter().position(|&r| r == base) {
            self.runners.remove(i);
            true
        } else {
            false
        }
    }
}

/// Advance every runner by `bases`; a runner on second takes an extra base
/// on a one-base hit (scores from second on a single).
fn advance_all(state: &mut InningState, bases: u8) {
    for r in &mut state.runners {
        if *r == 2 && bases == 1 {
            *r += 2;
        } else {
            *r += bases;
        }
    }
}

/// Apply one drawn event to the inning state.
///
/// Runners pushed to >= 4 are left in place; the engine settles them via
/// [`sweep_home`] only if the inning is still live afterwards.
pub fn apply_event(state: &mut InningState, event: Event) {
    match event {
        Event::Strikeout | Event::FoulOut => {
            state.outs += 1;
        }
        Event::OutAtFirst => {
            state.outs += 1;
            for r in &mut state.runners {
                *r += 1;
            }
        }
        Event::FlyOut => {
            state.outs += 1;
            // Sac fly: only credited while the inning is still live.
            if state.outs < 3 && state.remove_runner_at(3) {
                state.runs += 1;
            }
        }
        Event::DoublePlay => {
            state.outs += 1;
            if state.remove_runner_at(1) {
                state.outs = (state.outs + 1).min(3);
                for r in &mut state.runners {
                    *r += 1;
                }
            }
        }
        Event::Single => {
            advance_all(state, 1);
            state.runners.push(1);
        }
        Event::Double => {
            advance_all(state, 2);
            state.runners.push(2);
        }
        Event::Triple => {
            advance_all(state, 3);
            state.runners.push(3);
        }
        Event::HomeRun => {
            advance_all(state, 4);
            state.runners.push(4);
        }
        Event::Error => {
            for r in &mut state.runners {
                *r += 1;
            }
            state.runners.push(1);
        }
        Event::Walk => {
            // Forced status is evaluated against pre-walk occupancy: a
            // runner advances only if every base strictly behind it was
            // occupied before the batter took first.
            let occupied = state.occupancy();
            for r in &mut state.runners {
                let forced = (1..*r).all(|b| occupied & (1 << b) != 0);
                if forced {
                    *r += 1;
                }
            }
            state.runners.push(1);
        }
    }
}

/// Credit every runner who reached home: one run each, base vacated.
pub fn sweep_home(state: &mut InningState) {
    let mut i = 0;
    while i < state.runners.len() {
        if state.runners[i] >= 4 {
            state.runners.remove(i);
            state.runs += 1;
        } else {
            i += 1;
        }
    }
}

/// One full engine step: apply the event, then settle home-reaching
/// runners unless that event ended the inning. Returns true when the
/// inning is over.
pub fn apply_and_settle(state: &mut InningState, event: Event) -> bool {
    apply_event(state, event);
    if state.outs >= 3 {
        return true;
    }
    sweep_home(state);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(outs: u32, runners: &[u8]) -> InningState {
        InningState {
            outs,
            runs: 0,
            runners: runners.to_vec(),
        }
    }

    fn sorted_runners(state: &InningState) -> Vec<u8> {
        let mut r = state.runners.clone();
        r.sort_unstable();
        r
    }

    #[test]
    fn test_strikeout_and_foul_out_add_one_out() {
        for event in [Event::Strikeout, Event::FoulOut] {
            let mut s = state(0, &[1, 3]);
            apply_event(&mut s, event);
            assert_eq!(s.outs, 1);
            assert_eq!(s.runs, 0);
            assert_eq!(sorted_runners(&s), vec![1, 3]);
        }
    }

    #[test]
    fn test_out_at_first_advances_everyone() {
        let mut s = state(0, &[1, 2]);
        let done = apply_and_settle(&mut s, Event::OutAtFirst);
        assert!(!done);
        assert_eq!(s.outs, 1);
        assert_eq!(sorted_runners(&s), vec![2, 3]);
    }

    #[test]
    fn test_out_at_first_third_out_never_scores() {
        // Runner pushed across home by the third out: sweep is skipped.
        let mut s = state(2, &[3]);
        let done = apply_and_settle(&mut s, Event::OutAtFirst);
        assert!(done);
        assert_eq!(s.outs, 3);
        assert_eq!(s.runs, 0);
    }

    #[test]
    fn test_fly_out_scores_runner_on_third() {
        let mut s = state(0, &[3, 1]);
        let done = apply_and_settle(&mut s, Event::FlyOut);
        assert!(!done);
        assert_eq!(s.outs, 1);
        assert_eq!(s.runs, 1);
        assert_eq!(sorted_runners(&s), vec![1]);
    }

    #[test]
    fn test_fly_out_third_out_exception() {
        // Third out on a fly ends the inning with no run on the play.
        let mut s = state(2, &[3]);
        let done = apply_and_settle(&mut s, Event::FlyOut);
        assert!(done);
        assert_eq!(s.outs, 3);
        assert_eq!(s.runs, 0);
    }

    #[test]
    fn test_fly_out_no_runner_on_third() {
        let mut s = state(0, &[1, 2]);
        apply_event(&mut s, Event::FlyOut);
        assert_eq!(s.outs, 1);
        assert_eq!(s.runs, 0);
        assert_eq!(sorted_runners(&s), vec![1, 2]);
    }

    #[test]
    fn test_double_play_with_runner_on_first() {
        let mut s = state(0, &[1, 3]);
        let done = apply_and_settle(&mut s, Event::DoublePlay);
        assert!(!done);
        assert_eq!(s.outs, 2);
        // Runner from third advanced home and scores in the sweep.
        assert_eq!(s.runs, 1);
        assert!(s.runners.is_empty());
    }

    #[test]
    fn test_double_play_without_runner_on_first() {
        let mut s = state(1, &[2, 3]);
        apply_event(&mut s, Event::DoublePlay);
        assert_eq!(s.outs, 2);
        assert_eq!(s.runs, 0);
        assert_eq!(sorted_runners(&s), vec![2, 3]);
    }

    #[test]
    fn test_double_play_third_out_never_scores() {
        let mut s = state(1, &[1, 3]);
        let done = apply_and_settle(&mut s, Event::DoublePlay);
        assert!(done);
        assert_eq!(s.outs, 3);
        assert_eq!(s.runs, 0);
    }

    #[test]
    fn test_double_play_outs_capped_at_three() {
        let mut s = state(2, &[1]);
        apply_event(&mut s, Event::DoublePlay);
        assert_eq!(s.outs, 3);
    }

    #[test]
    fn test_single_batter_reaches_first() {
        let mut s = state(0, &[]);
        let done = apply_and_settle(&mut s, Event::Single);
        assert!(!done);
        assert_eq!(sorted_runners(&s), vec![1]);
        assert_eq!(s.runs, 0);
    }

    #[test]
    fn test_single_scores_runner_from_second() {
        // A runner on second takes two bases on a single,
        // 2 + 2 = 4, credited by the sweep.
        let mut s = state(0, &[2]);
        let done = apply_and_settle(&mut s, Event::Single);
        assert!(!done);
        assert_eq!(s.runs, 1);
        assert_eq!(sorted_runners(&s), vec![1]);
    }

    #[test]
    fn test_single_runner_on_first_holds_at_second() {
        let mut s = state(0, &[1]);
        apply_and_settle(&mut s, Event::Single);
        assert_eq!(s.runs, 0);
        assert_eq!(sorted_runners(&s), vec![1, 2]);
    }

    #[test]
    fn test_double_scores_from_second_and_third() {
        let mut s = state(0, &[2, 3]);
        apply_and_settle(&mut s, Event::Double);
        assert_eq!(s.runs, 2);
        assert_eq!(sorted_runners(&s), vec![2]);
    }

    #[test]
    fn test_triple_clears_bases() {
        let mut s = state(0, &[1, 2, 3]);
        apply_and_settle(&mut s, Event::Triple);
        assert_eq!(s.runs, 3);
        assert_eq!(sorted_runners(&s), vec![3]);
    }

    #[test]
    fn test_home_run_bases_loaded_scores_four() {
        // Grand slam: all three runners plus the batter score.
        let mut s = state(0, &[1, 2, 3]);
        let done = apply_and_settle(&mut s, Event::HomeRun);
        assert!(!done);
        assert_eq!(s.runs, 4);
        assert!(s.runners.is_empty());
    }

    #[test]
    fn test_error_advances_one_no_second_base_exception() {
        // Unlike a single, an error does not score the runner from second.
        let mut s = state(0, &[2]);
        apply_and_settle(&mut s, Event::Error);
        assert_eq!(s.runs, 0);
        assert_eq!(sorted_runners(&s), vec![1, 3]);
    }

    #[test]
    fn test_walk_empty_bases() {
        // Walk with bases empty: batter on first, nothing else moves.
        let mut s = state(0, &[]);
        apply_and_settle(&mut s, Event::Walk);
        assert_eq!(s.runs, 0);
        assert_eq!(sorted_runners(&s), vec![1]);
    }

    #[test]
    fn test_walk_forces_first_and_second() {
        // Runners on first and second are both forced.
        let mut s = state(0, &[1, 2]);
        apply_and_settle(&mut s, Event::Walk);
        assert_eq!(s.runs, 0);
        assert_eq!(sorted_runners(&s), vec![1, 2, 3]);
    }

    #[test]
    fn test_walk_does_not_force_runner_on_second_alone() {
        // First base was empty before the walk, so the runner
        // on second is not forced and holds.
        let mut s = state(0, &[2]);
        apply_and_settle(&mut s, Event::Walk);
        assert_eq!(s.runs, 0);
        assert_eq!(sorted_runners(&s), vec![1, 2]);
    }

    #[test]
    fn test_walk_bases_loaded_scores_one() {
        let mut s = state(0, &[1, 2, 3]);
        apply_and_settle(&mut s, Event::Walk);
        assert_eq!(s.runs, 1);
        assert_eq!(sorted_runners(&s), vec![1, 2, 3]);
    }

    #[test]
    fn test_walk_third_unforced_when_second_empty() {
        let mut s = state(0, &[1, 3]);
        apply_and_settle(&mut s, Event::Walk);
        assert_eq!(s.runs, 0);
        assert_eq!(sorted_runners(&s), vec![1, 2, 3]);
    }

    #[test]
    fn test_runs_monotonic_over_sequence() {
        let events = [
            Event::Walk,
            Event::Single,
            Event::Double,
            Event::FlyOut,
            Event::HomeRun,
            Event::Strikeout,
            Event::Strikeout,
        ];
        let mut s = InningState::new();
        let mut last_runs = 0;
        for event in events {
            let done = apply_and_settle(&mut s, event);
            assert!(s.runs >= last_runs);
            assert!(s.outs <= 3);
            last_runs = s.runs;
            if done {
                break;
            }
        }
    }
}
