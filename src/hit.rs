//! Tap hit testing
//!
//! One synchronous pick per tap. The detector only reports which node is
//! frontmost under the finger; deciding whether that node is the live target
//! is up to the game.

use glam::Vec2;

use crate::renderer::{NodeHandle, Renderer};

/// Outcome of a single tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTestResult {
    pub hit: bool,
    /// Frontmost node under the tap
    pub node: Option<NodeHandle>,
}

impl HitTestResult {
    pub const MISS: Self = Self {
        hit: false,
        node: None,
    };

    /// True if the tap landed on exactly this node
    pub fn is_node(&self, node: NodeHandle) -> bool {
        self.node == Some(node)
    }
}

/// Ask the renderer what is under `tap`
pub fn test_hit<R: Renderer + ?Sized>(renderer: &R, tap: Vec2) -> HitTestResult {
    match renderer.pick(tap) {
        Some(node) => HitTestResult {
            hit: true,
            node: Some(node),
        },
        None => HitTestResult::MISS,
    }
}
