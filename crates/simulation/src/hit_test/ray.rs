use bevy::prelude::*;

use crate::pickup::{CollisionVolume, Pickup};

/// Scale below which a pickup's collision volume is treated as collapsed.
const MIN_SCALE: f32 = 1e-6;

/// Slab test against an axis-aligned box centred on the origin.
///
/// Returns the ray parameter of the first intersection at or ahead of the
/// origin. A ray starting inside the box reports `0.0`.
pub fn ray_aabb_distance(origin: Vec3, direction: Vec3, half_extents: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        let h = half_extents[axis];
        if d.abs() < f32::EPSILON {
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (t0, t1) = {
            let a = (-h - o) * inv;
            let b = (h - o) * inv;
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        };
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }

    if t_max < 0.0 {
        return None;
    }
    Some(t_min.max(0.0))
}

/// World-space distance along `ray` to a pickup's collision volume.
///
/// The ray is moved into the pickup's local space so the volume follows the
/// pickup's rotation and scale. Because the transform is affine, the local ray
/// parameter equals the world distance along the unit direction.
pub fn intersect_collision_volume(
    ray: Ray3d,
    transform: &Transform,
    volume: &CollisionVolume,
) -> Option<f32> {
    if transform.scale.abs().min_element() < MIN_SCALE {
        return None;
    }
    let local_from_world = transform.compute_matrix().inverse();
    let origin = local_from_world.transform_point3(ray.origin);
    let direction = local_from_world.transform_vector3(*ray.direction);
    ray_aabb_distance(origin, direction, volume.half_extents)
}

/// The closest hittable pickup along `ray`, with its distance.
///
/// Pickups that were already hit are skipped, so a press goes through a
/// popping pickup to whatever is behind it.
pub fn find_nearest_hit<'a>(
    ray: Ray3d,
    candidates: impl IntoIterator<Item = (Entity, &'a Pickup, &'a Transform, &'a CollisionVolume)>,
) -> Option<(Entity, f32)> {
    candidates
        .into_iter()
        .filter(|(_, pickup, _, _)| pickup.is_hittable())
        .filter_map(|(entity, _, transform, volume)| {
            intersect_collision_volume(ray, transform, volume).map(|d| (entity, d))
        })
        .fold(None, |best: Option<(Entity, f32)>, (entity, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((entity, distance)),
        })
}
