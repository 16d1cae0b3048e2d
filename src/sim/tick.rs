//! Game phase transitions
//!
//! Taps, animation callbacks and the restart button never touch state
//! directly. They are turned into `Request`s and applied here one at a time,
//! which makes the hit path and the arrival path mutually exclusive.

use super::difficulty;
use super::state::{GamePhase, Session};
use super::target::{Retirement, Target};

/// A transition request from input or the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Spawn the opening target of a session
    Start,
    /// The player tapped the live target
    Hit { target_id: u32 },
    /// A target's motion finished
    Arrived { target_id: u32 },
    /// Restart button pressed
    Restart,
}

/// What changed, for the renderer and HUD to mirror
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    RoundStarted,
    TargetSpawned(Target),
    TargetRetired { id: u32, cause: Retirement },
    ScoreChanged(u32),
    GameOver { score: u32 },
}

/// Apply one request at clock time `now`
///
/// Requests that do not fit the current phase or name a target that is no
/// longer live are ignored and produce no events.
pub fn step(session: &mut Session, request: Request, now: f64) -> Vec<SimEvent> {
    let mut events = Vec::new();

    match (session.state.phase, request) {
        (GamePhase::Playing, Request::Start) => {
            if session.target().is_some() {
                log::debug!("Start ignored, a target is already live");
                return events;
            }
            log::info!("Round started (seed {})", session.seed);
            events.push(SimEvent::RoundStarted);
            events.push(SimEvent::ScoreChanged(session.state.score));
            events.push(SimEvent::TargetSpawned(session.spawn_target(now).clone()));
        }

        (GamePhase::Playing, Request::Hit { target_id }) => {
            if session.retire_target(target_id, Retirement::Hit).is_none() {
                return events;
            }
            events.push(SimEvent::TargetRetired {
                id: target_id,
                cause: Retirement::Hit,
            });

            session.state = difficulty::on_hit(session.state, &session.tuning);
            events.push(SimEvent::ScoreChanged(session.state.score));
            events.push(SimEvent::TargetSpawned(session.spawn_target(now).clone()));
        }

        (GamePhase::Playing, Request::Arrived { target_id }) => {
            if session.retire_target(target_id, Retirement::Arrived).is_none() {
                return events;
            }
            events.push(SimEvent::TargetRetired {
                id: target_id,
                cause: Retirement::Arrived,
            });

            session.state.phase = GamePhase::GameOver;
            log::info!("Game over, score {}", session.state.score);
            events.push(SimEvent::GameOver {
                score: session.state.score,
            });
        }

        (GamePhase::GameOver, Request::Restart) => {
            session.state = difficulty::reset(session.state, &session.tuning);
            log::info!("Restarted");
            events.push(SimEvent::RoundStarted);
            events.push(SimEvent::ScoreChanged(session.state.score));
            events.push(SimEvent::TargetSpawned(session.spawn_target(now).clone()));
        }

        (phase, request) => {
            log::debug!("{:?} ignored in {:?}", request, phase);
        }
    }

    events
}
