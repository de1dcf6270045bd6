//! Explicit camera registration.
//!
//! The rendering layer publishes the active camera's transform and projection
//! into `CameraContext` once per frame. The projector and the hit-test read it
//! from there rather than searching the scene for a camera, and a withdrawn
//! camera simply reads as `None`.

use bevy::prelude::*;

/// Snapshot of a camera's placement and projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub world_from_view: Mat4,
    pub clip_from_view: Mat4,
    /// Logical size of the viewport in pixels.
    pub viewport_size: Vec2,
}

impl CameraView {
    pub fn new(world_from_view: Mat4, clip_from_view: Mat4, viewport_size: Vec2) -> Self {
        Self {
            world_from_view,
            clip_from_view,
            viewport_size,
        }
    }

    /// Perspective camera using Bevy's infinite reverse-Z projection.
    pub fn perspective(transform: Transform, fov_y: f32, viewport_size: Vec2, near: f32) -> Self {
        let aspect = if viewport_size.y > 0.0 {
            viewport_size.x / viewport_size.y
        } else {
            1.0
        };
        Self::new(
            transform.compute_matrix(),
            Mat4::perspective_infinite_reverse_rh(fov_y, aspect, near),
            viewport_size,
        )
    }

    pub fn world_from_clip(&self) -> Mat4 {
        self.world_from_view * self.clip_from_view.inverse()
    }

    pub fn position(&self) -> Vec3 {
        self.world_from_view.w_axis.truncate()
    }

    /// Ray from the near plane through a point in normalized device coordinates.
    ///
    /// Returns `None` when the projection is degenerate and the near and far
    /// points coincide.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray3d> {
        let world_from_clip = self.world_from_clip();
        // Reverse-Z: the near plane sits at z = 1 and z = 0 is at infinity.
        let near = world_from_clip.project_point3(ndc.extend(1.0));
        let far = world_from_clip.project_point3(ndc.extend(f32::EPSILON));
        if !near.is_finite() || !far.is_finite() {
            return None;
        }
        let direction = Dir3::new(far - near).ok()?;
        Some(Ray3d {
            origin: near,
            direction,
        })
    }
}

/// Convert a screen position (origin top-left, Y down) into normalized device
/// coordinates in `[-1, 1]` with Y up.
pub fn screen_to_ndc(screen_pos: Vec2, viewport_size: Vec2) -> Option<Vec2> {
    if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (screen_pos.x / viewport_size.x) * 2.0 - 1.0,
        -(screen_pos.y / viewport_size.y) * 2.0 + 1.0,
    ))
}

/// The camera currently registered for spawning and hit testing.
#[derive(Resource, Default, Debug)]
pub struct CameraContext {
    view: Option<CameraView>,
}

impl CameraContext {
    pub fn publish(&mut self, view: CameraView) {
        self.view = Some(view);
    }

    pub fn withdraw(&mut self) {
        self.view = None;
    }

    pub fn view(&self) -> Option<&CameraView> {
        self.view.as_ref()
    }
}
