use bevy::prelude::*;

use simulation::camera_context::{CameraContext, CameraView};

const DEFAULT_DISTANCE: f32 = 14.0;
const DEFAULT_PITCH: f32 = 45.0 * std::f32::consts::PI / 180.0;

/// Orbital camera model: the camera sits on a sphere around a ground focus
/// point. User controls are disabled, so it only moves when this resource is
/// changed.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Ground point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
        }
    }
}

/// Marks the camera that is published for spawning and hit testing.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PickupCamera;

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();

    commands.spawn((
        Camera3d::default(),
        orbit_to_transform(&orbit),
        PickupCamera,
        Name::new("Camera"),
    ));
    commands.insert_resource(orbit);
}

pub fn orbit_to_transform(orbit: &OrbitCamera) -> Transform {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    Transform::from_translation(orbit.focus + Vec3::new(x, y, z)).looking_at(orbit.focus, Vec3::Y)
}

/// System: apply OrbitCamera state to the camera Transform when it changes.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<PickupCamera>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = orbit_to_transform(&orbit);
}

/// System: register the pickup camera's placement and projection in
/// `CameraContext`, or withdraw it when there is no usable camera.
///
/// Reads `Transform` rather than `GlobalTransform` so a camera moved earlier
/// this frame is seen immediately; the camera is a root entity.
pub fn publish_camera_context(
    cameras: Query<(&Camera, &Transform), With<PickupCamera>>,
    mut context: ResMut<CameraContext>,
) {
    let view = cameras.get_single().ok().and_then(|(camera, transform)| {
        let viewport_size = camera.logical_viewport_size()?;
        Some(CameraView::new(
            transform.compute_matrix(),
            camera.clip_from_view(),
            viewport_size,
        ))
    });

    match view {
        Some(view) => context.publish(view),
        None => {
            if context.view().is_some() {
                warn!("Pickup camera unavailable; spawning falls back to the default region");
            }
            context.withdraw();
        }
    }
}
