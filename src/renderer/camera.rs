//! Perspective camera for screen/world conversion
//!
//! The camera sits at `eye` looking down -Z with +Y up, like a default scene
//! camera. Screen points are in view points with the origin at the top-left.

use glam::{Mat4, Vec2, Vec3, Vec4};

const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    /// Vertical field of view (radians)
    pub fovy_radians: f32,
    /// Viewport size in points
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(eye: Vec3, fov_degrees: f32, viewport: Vec2) -> Self {
        Self {
            eye,
            fovy_radians: fov_degrees.to_radians(),
            viewport,
        }
    }

    fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y.max(1.0)
    }

    /// Combined projection * view matrix
    pub fn view_projection(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fovy_radians, self.aspect(), Z_NEAR, Z_FAR);
        let view = Mat4::look_at_rh(self.eye, self.eye + Vec3::NEG_Z, Vec3::Y);
        proj * view
    }

    /// World-space ray `(origin, direction)` through a screen point
    pub fn screen_ray(&self, point: Vec2) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * point.x / self.viewport.x) - 1.0;
        let ndc_y = 1.0 - (2.0 * point.y / self.viewport.y);
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        (self.eye, (p1 - self.eye).normalize())
    }

    /// Screen point of a world position, None if it is behind the camera
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        ))
    }
}

/// Distance along a normalized ray to the first intersection with a sphere
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
