use bevy::prelude::*;

use crate::camera_context::CameraView;
use crate::config::GROUND_Y;

use super::types::SpawnRegion;

/// Rays whose vertical component is below this are treated as parallel to
/// the ground.
const PARALLEL_EPSILON: f32 = 1e-6;

/// NDC corners of the view frustum.
const FRUSTUM_CORNERS: [Vec2; 4] = [
    Vec2::new(-1.0, -1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(-1.0, 1.0),
];

/// Ray-plane intersection against the horizontal ground plane.
///
/// Returns `None` for rays parallel to the plane and for rays that would only
/// meet it behind their origin.
pub fn intersect_ground(ray: Ray3d) -> Option<Vec3> {
    if ray.direction.y.abs() <= PARALLEL_EPSILON {
        return None;
    }
    let t = (GROUND_Y - ray.origin.y) / ray.direction.y;
    if t <= 0.0 {
        return None;
    }
    Some(ray.origin + *ray.direction * t)
}

/// Bounding rectangle of the frustum corner rays' ground hits, or `None` when
/// no corner reaches the ground.
pub fn project_ground_bounds(view: &CameraView) -> Option<SpawnRegion> {
    let mut bounds: Option<SpawnRegion> = None;
    for corner in FRUSTUM_CORNERS {
        let Some(hit) = view.ray_from_ndc(corner).and_then(intersect_ground) else {
            continue;
        };
        match bounds.as_mut() {
            Some(region) => region.include(hit.x, hit.z),
            None => bounds = Some(SpawnRegion::from_point(hit.x, hit.z)),
        }
    }
    bounds
}

/// Inset spawn region for the given camera.
///
/// Falls back to `SpawnRegion::FALLBACK` (not inset) when there is no camera
/// or the camera sees no ground.
pub fn spawn_region(view: Option<&CameraView>, inset_fraction: f32) -> SpawnRegion {
    let Some(view) = view else {
        debug!("No camera registered, spawning inside the fallback region");
        return SpawnRegion::FALLBACK;
    };
    match project_ground_bounds(view) {
        Some(bounds) => bounds.inset(inset_fraction),
        None => {
            debug!("Camera frustum misses the ground, spawning inside the fallback region");
            SpawnRegion::FALLBACK
        }
    }
}
