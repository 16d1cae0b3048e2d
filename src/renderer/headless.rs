//! In-memory scene backend
//!
//! Keeps node transforms and running position animations, steps them on
//! `advance`, and picks with ray/sphere tests through a perspective camera.
//! Nothing is drawn.

use std::collections::{BTreeMap, HashMap};

use glam::{Quat, Vec2, Vec3};

use super::camera::{Camera, ray_sphere};
use super::{Completion, NodeHandle, Renderer};
use crate::GameError;
use crate::consts::{TARGET_ASSET, TARGET_NODE};

/// What a node in the scene stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Clone of the loaded target model
    Target,
    /// Anything else that can be tapped
    Scenery,
}

struct Animation {
    from: Vec3,
    to: Vec3,
    start: f64,
    duration: f32,
    on_complete: Option<Completion>,
}

struct Node {
    kind: NodeKind,
    position: Vec3,
    orientation: Quat,
    radius: f32,
    /// Not pickable until placed
    placed: bool,
    animation: Option<Animation>,
    flashes: u32,
}

pub struct HeadlessRenderer {
    camera: Camera,
    /// Known scene assets and the node names inside them
    assets: HashMap<String, Vec<String>>,
    template_loaded: bool,
    target_radius: f32,
    /// Ordered by handle for stable iteration
    nodes: BTreeMap<NodeHandle, Node>,
    next_handle: u64,
    clock: f64,
}

impl HeadlessRenderer {
    /// Backend with the bundled ship asset available
    pub fn new(camera: Camera, target_radius: f32) -> Self {
        let mut assets = HashMap::new();
        assets.insert(TARGET_ASSET.to_string(), vec![TARGET_NODE.to_string()]);
        Self::with_assets(camera, target_radius, assets)
    }

    /// Backend with an explicit asset catalog
    pub fn with_assets(
        camera: Camera,
        target_radius: f32,
        assets: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            camera,
            assets,
            template_loaded: false,
            target_radius,
            nodes: BTreeMap::new(),
            next_handle: 1,
            clock: 0.0,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Clock time of the last `advance`
    pub fn clock(&self) -> f64 {
        self.clock
    }

    fn add_node(
        &mut self,
        kind: NodeKind,
        position: Vec3,
        radius: f32,
        placed: bool,
    ) -> NodeHandle {
        let handle = NodeHandle(self.next_handle);
        self.next_handle += 1;
        self.nodes.insert(
            handle,
            Node {
                kind,
                position,
                orientation: Quat::IDENTITY,
                radius,
                placed,
                animation: None,
                flashes: 0,
            },
        );
        handle
    }

    /// Add a static, pickable non-target node
    pub fn add_scenery(&mut self, position: Vec3, radius: f32) -> NodeHandle {
        self.add_node(NodeKind::Scenery, position, radius, true)
    }

    pub fn contains(&self, node: NodeHandle) -> bool {
        self.nodes.contains_key(&node)
    }

    pub fn node_kind(&self, node: NodeHandle) -> Option<NodeKind> {
        self.nodes.get(&node).map(|n| n.kind)
    }

    pub fn node_position(&self, node: NodeHandle) -> Option<Vec3> {
        self.nodes.get(&node).map(|n| n.position)
    }

    pub fn node_orientation(&self, node: NodeHandle) -> Option<Quat> {
        self.nodes.get(&node).map(|n| n.orientation)
    }

    pub fn is_animating(&self, node: NodeHandle) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.animation.is_some())
    }

    /// How many times a node was flashed
    pub fn flash_count(&self, node: NodeHandle) -> u32 {
        self.nodes.get(&node).map_or(0, |n| n.flashes)
    }

    /// Handles of all target nodes currently in the scene
    pub fn target_nodes(&self) -> Vec<NodeHandle> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.kind == NodeKind::Target)
            .map(|(h, _)| *h)
            .collect()
    }

    /// Screen point of a node's current position
    pub fn screen_position(&self, node: NodeHandle) -> Option<Vec2> {
        self.node_position(node).and_then(|p| self.camera.project(p))
    }
}

impl Renderer for HeadlessRenderer {
    fn load_target_asset(&mut self, asset: &str, node: &str) -> Result<(), GameError> {
        let nodes = self
            .assets
            .get(asset)
            .ok_or_else(|| GameError::AssetNotFound {
                asset: asset.to_string(),
            })?;
        if !nodes.iter().any(|n| n == node) {
            return Err(GameError::NodeNotFound {
                asset: asset.to_string(),
                node: node.to_string(),
            });
        }
        self.template_loaded = true;
        log::debug!("Loaded target template '{}' from {}", node, asset);
        Ok(())
    }

    fn instantiate_target(&mut self) -> NodeHandle {
        debug_assert!(self.template_loaded, "target asset not loaded");
        self.add_node(NodeKind::Target, Vec3::ZERO, self.target_radius, false)
    }

    fn place(&mut self, node: NodeHandle, position: Vec3, orientation: Quat) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.position = position;
            n.orientation = orientation;
            n.placed = true;
        }
    }

    fn animate_position(
        &mut self,
        node: NodeHandle,
        from: Vec3,
        to: Vec3,
        duration: f32,
        on_complete: Completion,
    ) {
        let Some(n) = self.nodes.get_mut(&node) else {
            log::warn!("animate_position on unknown node {:?}", node);
            return;
        };
        n.position = from;
        n.animation = Some(Animation {
            from,
            to,
            start: self.clock,
            duration,
            on_complete: Some(on_complete),
        });
    }

    fn remove(&mut self, node: NodeHandle) {
        // Dropping the animation drops its completion unfired
        self.nodes.remove(&node);
    }

    fn pick(&self, screen_point: Vec2) -> Option<NodeHandle> {
        let (origin, dir) = self.camera.screen_ray(screen_point);
        self.nodes
            .iter()
            .filter(|(_, n)| n.placed)
            .filter_map(|(h, n)| ray_sphere(origin, dir, n.position, n.radius).map(|t| (*h, t)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(h, _)| h)
    }

    fn flash(&mut self, node: NodeHandle) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.flashes += 1;
        }
    }

    fn advance(&mut self, now: f64) {
        self.clock = now;
        let mut finished = Vec::new();

        for node in self.nodes.values_mut() {
            let Some(anim) = node.animation.as_mut() else {
                continue;
            };
            let t = if anim.duration > 0.0 {
                (((now - anim.start) / anim.duration as f64) as f32).clamp(0.0, 1.0)
            } else {
                1.0
            };
            node.position = anim.from.lerp(anim.to, t);
            if t >= 1.0 {
                finished.extend(anim.on_complete.take());
                node.animation = None;
            }
        }

        for on_complete in finished {
            on_complete();
        }
    }
}
