//! Game driver
//!
//! Owns the simulation session and mirrors its events onto a renderer and a
//! HUD. All state changes happen inside `Game` methods; animation completion
//! callbacks only post a request on a channel, which `frame` drains, so the
//! renderer may fire them from any thread.

use std::sync::mpsc::{self, Receiver, Sender};

use glam::Vec2;

use crate::hit::test_hit;
use crate::renderer::{NodeHandle, Renderer};
use crate::sim::{GamePhase, GameState, Request, Retirement, Session, SimEvent, Target, step};
use crate::ui::{Hud, game_over_text, score_text};
use crate::{GameError, Settings};

pub struct Game<R: Renderer, H: Hud> {
    session: Session,
    renderer: R,
    hud: H,
    /// Target id and the node showing it
    live: Option<(u32, NodeHandle)>,
    requests_tx: Sender<Request>,
    requests_rx: Receiver<Request>,
    /// Clock time of the current frame (seconds)
    now: f64,
}

impl<R: Renderer, H: Hud> Game<R, H> {
    /// Load the target asset and start the first round at clock time `now`
    ///
    /// A missing asset or target node aborts here; nothing later can fail.
    pub fn new(
        mut renderer: R,
        hud: H,
        settings: &Settings,
        seed: u64,
        now: f64,
    ) -> Result<Self, GameError> {
        settings.validate()?;
        renderer.load_target_asset(&settings.target_asset, &settings.target_node)?;
        renderer.advance(now);

        let (requests_tx, requests_rx) = mpsc::channel();
        let mut game = Self {
            session: Session::new(seed, settings.tuning),
            renderer,
            hud,
            live: None,
            requests_tx,
            requests_rx,
            now,
        };
        game.apply(Request::Start);
        Ok(game)
    }

    /// Advance to clock time `now` and apply any arrivals that fired
    pub fn frame(&mut self, now: f64) {
        self.now = now;
        self.renderer.advance(now);
        self.pump();
    }

    /// Apply queued requests from animation callbacks
    pub fn pump(&mut self) {
        while let Ok(request) = self.requests_rx.try_recv() {
            self.apply(request);
        }
    }

    /// Handle a tap at a screen point; returns true if it hit the live target
    pub fn tap(&mut self, point: Vec2) -> bool {
        // An arrival already delivered outranks the tap
        self.pump();
        if self.session.state.phase != GamePhase::Playing {
            return false;
        }
        let result = test_hit(&self.renderer, point);
        match self.live {
            Some((target_id, node)) if result.is_node(node) => {
                self.apply(Request::Hit { target_id });
                true
            }
            _ => {
                log::debug!("Tap at {} missed ({:?})", point, result.node);
                false
            }
        }
    }

    /// Restart button; only does something after a round is lost
    pub fn restart(&mut self) -> bool {
        self.pump();
        if self.session.state.phase != GamePhase::GameOver {
            return false;
        }
        self.apply(Request::Restart);
        true
    }

    fn apply(&mut self, request: Request) {
        for event in step(&mut self.session, request, self.now) {
            self.present(event);
        }
    }

    fn present(&mut self, event: SimEvent) {
        match event {
            SimEvent::RoundStarted => self.hud.set_restart_visible(false),
            SimEvent::TargetSpawned(target) => self.show_target(&target),
            SimEvent::TargetRetired { id, cause } => match self.live {
                Some((live_id, node)) if live_id == id => {
                    if cause == Retirement::Hit {
                        self.renderer.flash(node);
                    }
                    self.renderer.remove(node);
                    self.live = None;
                }
                _ => log::warn!("Retired target {} has no node", id),
            },
            SimEvent::ScoreChanged(score) => self.hud.show_text(&score_text(score)),
            SimEvent::GameOver { score } => {
                self.hud.show_text(&game_over_text(score));
                self.hud.set_restart_visible(true);
            }
        }
    }

    fn show_target(&mut self, target: &Target) {
        let node = self.renderer.instantiate_target();
        self.renderer.place(node, target.spawn_position, target.orientation);

        let tx = self.requests_tx.clone();
        let target_id = target.id;
        self.renderer.animate_position(
            node,
            target.spawn_position,
            target.destination,
            target.travel_duration,
            Box::new(move || {
                // Game may already be gone
                let _ = tx.send(Request::Arrived { target_id });
            }),
        );
        self.live = Some((target.id, node));
    }

    pub fn state(&self) -> &GameState {
        &self.session.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Live target and the node showing it
    pub fn live_target(&self) -> Option<(&Target, NodeHandle)> {
        let (id, node) = self.live?;
        self.session
            .target()
            .filter(|t| t.id == id)
            .map(|t| (t, node))
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Camera, HeadlessRenderer};
    use crate::ui::LogHud;
    use glam::Vec3;

    fn game() -> Game<HeadlessRenderer, LogHud> {
        let settings = Settings::default();
        let camera = Camera::new(Vec3::ZERO, settings.fov_degrees, Vec2::new(400.0, 800.0));
        let renderer = HeadlessRenderer::new(camera, settings.tuning.target_radius);
        Game::new(renderer, LogHud::default(), &settings, 1234, 0.0).unwrap()
    }

    #[test]
    fn test_starts_playing_with_one_target() {
        let game = game();
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.hud().text, "Score: 0");
        assert!(!game.hud().restart_visible);
        assert_eq!(game.renderer().target_nodes().len(), 1);
        let (target, node) = game.live_target().unwrap();
        assert_eq!(game.renderer().node_position(node), Some(target.spawn_position));
    }

    #[test]
    fn test_missing_asset_is_fatal() {
        let settings = Settings {
            target_node: "plane".to_string(),
            ..Default::default()
        };
        let camera = Camera::new(Vec3::ZERO, 60.0, Vec2::new(400.0, 800.0));
        let renderer = HeadlessRenderer::new(camera, 2.0);
        let result = Game::new(renderer, LogHud::default(), &settings, 1, 0.0);
        assert!(matches!(result, Err(GameError::NodeNotFound { .. })));
    }

    #[test]
    fn test_tap_on_empty_space_changes_nothing() {
        let mut game = game();
        let before = game.live_target().map(|(t, n)| (t.id, n));
        assert!(!game.tap(Vec2::new(1.0, 1.0)));
        assert_eq!(game.state().score, 0);
        assert_eq!(game.live_target().map(|(t, n)| (t.id, n)), before);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut game = game();
        assert!(!game.restart());
        assert_eq!(game.renderer().target_nodes().len(), 1);
    }

    #[test]
    fn test_degenerate_view_is_rejected() {
        let settings = Settings {
            fov_degrees: f32::NAN,
            ..Default::default()
        };
        let camera = Camera::new(Vec3::ZERO, 60.0, Vec2::new(400.0, 800.0));
        let renderer = HeadlessRenderer::new(camera, 2.0);
        let result = Game::new(renderer, LogHud::default(), &settings, 1, 0.0);
        assert!(matches!(result, Err(GameError::InvalidSettings(_))));
    }
}
