//! Spawn placement and heading
//!
//! A target appears off-axis far in front of the camera and is turned to face
//! along the ray from the camera through twice its own offset, so every ship
//! looks like it is flying outward no matter where it spawned.

use glam::{Mat3, Quat, Vec3};
use rand::Rng;

/// Where a new target appears and how it is turned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawn {
    pub position: Vec3,
    pub orientation: Quat,
}

/// Pick a spawn point around `origin`
///
/// x and y are whole units in `[-half_extent, half_extent]`, z is fixed at
/// `depth` in front of the origin.
pub fn compute_spawn<R: Rng>(
    rng: &mut R,
    origin: Vec3,
    half_extent: i32,
    depth: f32,
) -> Spawn {
    let x = rng.random_range(-half_extent..=half_extent) as f32;
    let y = rng.random_range(-half_extent..=half_extent) as f32;
    let offset = Vec3::new(x, y, depth);

    let position = origin + offset;
    // Face away from the origin, through 2x the offset
    let orientation = look_at(position, origin + offset * 2.0);

    Spawn {
        position,
        orientation,
    }
}

/// Rotation that points a node's forward axis (-Z) from `eye` at `target`
///
/// Up is +Y unless the view direction is (nearly) vertical, then +Z.
pub fn look_at(eye: Vec3, target: Vec3) -> Quat {
    let Some(forward) = (target - eye).try_normalize() else {
        return Quat::IDENTITY;
    };
    let up = if forward.dot(Vec3::Y).abs() > 0.999 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let right = forward.cross(up).normalize();
    let up = right.cross(forward);
    Quat::from_mat3(&Mat3::from_cols(right, up, -forward))
}

/// Forward (-Z) axis of a node with the given rotation
#[inline]
pub fn forward(orientation: Quat) -> Vec3 {
    orientation * Vec3::NEG_Z
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..500 {
            let spawn = compute_spawn(&mut rng, Vec3::ZERO, 25, -105.0);
            assert!(spawn.position.x.abs() <= 25.0);
            assert!(spawn.position.y.abs() <= 25.0);
            assert_eq!(spawn.position.z, -105.0);
            assert_eq!(spawn.position.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_spawn_faces_away_from_origin() {
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..100 {
            let spawn = compute_spawn(&mut rng, Vec3::ZERO, 25, -105.0);
            let expected = spawn.position.normalize();
            let facing = forward(spawn.orientation);
            assert!(facing.distance(expected) < 1e-4, "{facing} vs {expected}");
        }
    }

    #[test]
    fn test_spawn_relative_to_origin() {
        let origin = Vec3::new(10.0, -3.0, 4.0);
        let mut rng = Pcg32::seed_from_u64(3);
        let spawn = compute_spawn(&mut rng, origin, 0, -50.0);
        assert_eq!(spawn.position, origin + Vec3::new(0.0, 0.0, -50.0));
        assert!(forward(spawn.orientation).distance(Vec3::NEG_Z) < 1e-5);
    }

    #[test]
    fn test_spawn_is_repeatable_for_seed() {
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(
                compute_spawn(&mut a, Vec3::ZERO, 25, -105.0),
                compute_spawn(&mut b, Vec3::ZERO, 25, -105.0)
            );
        }
    }

    #[test]
    fn test_look_at_vertical_and_degenerate() {
        let q = look_at(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0));
        assert!(forward(q).distance(Vec3::Y) < 1e-5);
        assert_eq!(look_at(Vec3::ONE, Vec3::ONE), Quat::IDENTITY);
    }
}
