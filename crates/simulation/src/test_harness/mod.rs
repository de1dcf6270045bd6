//! # TestScene: headless integration test harness for the pickup lifecycle
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` with a registered camera and a
//! pickup prefab, and steps frame time by hand so timings are exact.

mod assertions;
mod queries;

use std::f32::consts::FRAC_PI_4;

use bevy::app::App;
use bevy::prelude::*;

use crate::camera_context::{CameraContext, CameraView};
use crate::config::PickupConfig;
use crate::pickup_rng::PickupRng;
use crate::spawner::PickupPrefab;
use crate::SimulationPlugin;

/// Logical viewport of the test camera, in pixels.
pub const TEST_VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

/// Seed for the harness RNG so spawn positions are repeatable.
pub const TEST_SEED: u64 = 7;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Build a scene, call `tick_secs()` to advance frame time, then query or
/// assert on the resulting ECS state.
pub struct TestScene {
    app: App,
}

impl TestScene {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Default config, a prefab, and a camera at (0, 10, 10) looking at the
    /// origin.
    pub fn new() -> Self {
        Self::with_config(PickupConfig::default())
    }

    pub fn with_config(config: PickupConfig) -> Self {
        Self::build(config, true)
    }

    /// A scene where spawning fails because no prefab was registered.
    pub fn without_prefab() -> Self {
        Self::build(PickupConfig::default(), false)
    }

    fn build(config: PickupConfig, with_prefab: bool) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Both must be in place BEFORE SimulationPlugin reads them.
        app.insert_resource(config);
        app.insert_resource(PickupRng::from_seed_u64(TEST_SEED));
        app.add_plugins(SimulationPlugin);

        if with_prefab {
            app.insert_resource(PickupPrefab {
                mesh: Handle::default(),
                material: Handle::default(),
            });
        }

        // One update so Startup runs; TimePlugin reports a zero delta on the
        // first frame, so no timers move.
        app.update();

        let mut scene = Self { app };
        scene.publish_camera(default_camera());
        scene
    }

    /// Replace the registered camera.
    pub fn with_camera(mut self, view: CameraView) -> Self {
        self.publish_camera(view);
        self
    }

    /// Withdraw the registered camera.
    pub fn without_camera(mut self) -> Self {
        self.app.world_mut().resource_mut::<CameraContext>().withdraw();
        self
    }

    pub fn publish_camera(&mut self, view: CameraView) {
        self.app
            .world_mut()
            .resource_mut::<CameraContext>()
            .publish(view);
    }
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Perspective camera 10 units up and 10 back, looking at the origin.
pub fn default_camera() -> CameraView {
    CameraView::perspective(
        Transform::from_xyz(0.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        FRAC_PI_4,
        TEST_VIEWPORT,
        0.1,
    )
}

/// Camera straight above `(x, z)` looking down, `height` units up.
pub fn top_down_camera(x: f32, z: f32, height: f32) -> CameraView {
    CameraView::perspective(
        Transform::from_xyz(x, height, z).looking_at(Vec3::new(x, 0.0, z), Vec3::NEG_Z),
        FRAC_PI_4,
        TEST_VIEWPORT,
        0.1,
    )
}

/// Screen position (origin top-left) at which `view` sees `point`, or `None`
/// when the point is behind the camera.
pub fn world_to_screen(view: &CameraView, point: Vec3) -> Option<Vec2> {
    let clip = view.clip_from_view * view.world_from_view.inverse() * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * view.viewport_size.x,
        (1.0 - ndc.y) * 0.5 * view.viewport_size.y,
    ))
}
