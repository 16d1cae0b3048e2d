//! Score and difficulty ramp
//!
//! Pure transitions over `GameState`: a hit adds a point and shortens the
//! next target's travel time, a reset restores the opening values.

use super::state::{GamePhase, GameState};
use crate::Tuning;

/// Score a hit and speed up the following targets
pub fn on_hit(state: GameState, tuning: &Tuning) -> GameState {
    GameState {
        score: state.score + 1,
        current_duration: (state.current_duration * tuning.speed_up).max(tuning.min_duration),
        ..state
    }
}

/// Opening state of a round
pub fn reset(_state: GameState, tuning: &Tuning) -> GameState {
    GameState {
        score: 0,
        current_duration: tuning.initial_duration,
        phase: GamePhase::Playing,
    }
}

/// Travel time after `hits` consecutive hits from the opening duration
pub fn duration_after(hits: u32, tuning: &Tuning) -> f32 {
    let mut duration = tuning.initial_duration;
    for _ in 0..hits {
        duration = (duration * tuning.speed_up).max(tuning.min_duration);
    }
    duration
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hit_scores_and_speeds_up() {
        let tuning = Tuning::default();
        let state = on_hit(GameState::new(&tuning), &tuning);
        assert_eq!(state.score, 1);
        assert!((state.current_duration - 4.75).abs() < 1e-6);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_three_hits() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        for _ in 0..3 {
            state = on_hit(state, &tuning);
        }
        assert_eq!(state.score, 3);
        assert!((state.current_duration - 4.286875).abs() < 1e-5);
    }

    #[test]
    fn test_floor_clamps() {
        let tuning = Tuning {
            min_duration: 4.9,
            ..Default::default()
        };
        let state = on_hit(GameState::new(&tuning), &tuning);
        assert_eq!(state.current_duration, 4.9);
        assert_eq!(on_hit(state, &tuning).current_duration, 4.9);
    }

    #[test]
    fn test_reset_restores_opening() {
        let tuning = Tuning::default();
        let played = GameState {
            score: 12,
            current_duration: 1.0,
            phase: GamePhase::GameOver,
        };
        assert_eq!(reset(played, &tuning), GameState::new(&tuning));
    }

    proptest! {
        #[test]
        fn prop_k_hits_trajectory(k in 0u32..120) {
            let tuning = Tuning::default();
            let mut state = GameState::new(&tuning);
            for _ in 0..k {
                state = on_hit(state, &tuning);
            }
            prop_assert_eq!(state.score, k);
            let expected = tuning.initial_duration as f64 * (tuning.speed_up as f64).powi(k as i32);
            let err = (state.current_duration as f64 - expected).abs();
            prop_assert!(
                err <= expected * 1e-4 + 1e-9,
                "k={} got={} want={}",
                k,
                state.current_duration,
                expected
            );
            prop_assert!(state.current_duration > 0.0);
            prop_assert_eq!(state.current_duration, duration_after(k, &tuning));
        }

        #[test]
        fn prop_reset_forgets_history(before in 0u32..50, after in 0u32..50) {
            let tuning = Tuning::default();
            let mut played = GameState::new(&tuning);
            for _ in 0..before {
                played = on_hit(played, &tuning);
            }
            played.phase = GamePhase::GameOver;

            let mut replay = reset(played, &tuning);
            let mut fresh = GameState::new(&tuning);
            for _ in 0..after {
                replay = on_hit(replay, &tuning);
                fresh = on_hit(fresh, &tuning);
            }
            prop_assert_eq!(replay, fresh);
        }

        #[test]
        fn prop_duration_never_increases(k in 1u32..200) {
            let tuning = Tuning::default();
            let mut state = GameState::new(&tuning);
            for _ in 0..k {
                let next = on_hit(state, &tuning);
                prop_assert!(next.current_duration <= state.current_duration);
                prop_assert!(next.score > state.score);
                state = next;
            }
        }
    }
}
