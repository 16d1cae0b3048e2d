//! Rendering contract
//!
//! The game never draws anything itself. It places, animates and removes
//! opaque nodes through `Renderer` and asks it which node sits under a tap.
//! `HeadlessRenderer` is a complete in-memory backend used by the native demo
//! and the tests.

pub mod camera;
pub mod headless;

pub use camera::Camera;
pub use headless::HeadlessRenderer;

use glam::{Quat, Vec2, Vec3};

use crate::GameError;

/// Opaque, non-owning reference to a scene node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub u64);

/// Fired once when a position animation completes
///
/// May be invoked from any thread; the game marshals it back onto its own
/// context before touching state.
pub type Completion = Box<dyn FnOnce() + Send + 'static>;

pub trait Renderer {
    /// Load the scene asset holding the target model and find its node
    ///
    /// Called once at startup. Failure is fatal.
    fn load_target_asset(&mut self, asset: &str, node: &str) -> Result<(), GameError>;

    /// Clone the loaded target model into the scene (hidden until placed)
    fn instantiate_target(&mut self) -> NodeHandle;

    fn place(&mut self, node: NodeHandle, position: Vec3, orientation: Quat);

    /// Move `node` from `from` to `to` over `duration` seconds
    ///
    /// `on_complete` runs once when the motion finishes. Removing the node
    /// first cancels it.
    fn animate_position(
        &mut self,
        node: NodeHandle,
        from: Vec3,
        to: Vec3,
        duration: f32,
        on_complete: Completion,
    );

    /// Remove a node and cancel its animations
    fn remove(&mut self, node: NodeHandle);

    /// Frontmost node under a screen point (points, origin top-left)
    fn pick(&self, screen_point: Vec2) -> Option<NodeHandle>;

    /// Brief highlight of a node that was hit
    fn flash(&mut self, _node: NodeHandle) {}

    /// Advance per-frame animations to clock time `now`
    ///
    /// Backends with their own display loop can ignore this.
    fn advance(&mut self, _now: f64) {}
}
