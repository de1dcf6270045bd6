//! Frame stepping, input and query methods for `TestScene`.

use std::time::Duration;

use bevy::prelude::*;

use crate::camera_context::{CameraContext, CameraView};
use crate::config::PickupConfig;
use crate::events::{PickupHit, PointerPressed, PointerSource};
use crate::pickup::{Pickup, ReactionState};
use crate::registry::ActivePickups;
use crate::spawn_region::{spawn_region, SpawnRegion};
use crate::spawner::SpawnTimer;
use crate::stats::PickupStats;

use super::{world_to_screen, TestScene};

impl TestScene {
    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Advance frame time by `secs` and run one `Update`.
    ///
    /// `Update` is run directly rather than through `app.update()` so the
    /// delta is exactly what the test asked for instead of wall-clock time.
    pub fn tick_secs(&mut self, secs: f32) {
        let world = self.app.world_mut();
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        world.run_schedule(Update);
    }

    /// Run frames of `dt` seconds until `total` seconds have elapsed.
    pub fn tick_for(&mut self, total: f32, dt: f32) {
        let frames = (total / dt).round() as u32;
        for _ in 0..frames {
            self.tick_secs(dt);
        }
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Queue a mouse press at a screen position; it is handled on the next
    /// tick.
    pub fn press_screen(&mut self, screen_pos: Vec2) {
        let viewport_size = self
            .camera()
            .map(|view| view.viewport_size)
            .unwrap_or(super::TEST_VIEWPORT);
        self.app.world_mut().send_event(PointerPressed {
            screen_pos,
            viewport_size,
            source: PointerSource::Mouse,
        });
    }

    /// Queue a press at the screen position where the camera sees `point`.
    pub fn press_at_world(&mut self, point: Vec3) {
        let view = self.camera().copied().expect("press_at_world needs a camera");
        let screen = world_to_screen(&view, point).expect("point is behind the camera");
        self.press_screen(screen);
    }

    /// Queue a press on a pickup's current position.
    pub fn press_pickup(&mut self, entity: Entity) {
        let position = self.pickup_position(entity).expect("pickup exists");
        self.press_at_world(position);
    }

    /// Queue a hit directly, bypassing the ray cast.
    pub fn send_hit(&mut self, entity: Entity) {
        self.app.world_mut().send_event(PickupHit {
            entity,
            distance: 0.0,
        });
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn config(&self) -> &PickupConfig {
        self.resource::<PickupConfig>()
    }

    pub fn stats(&self) -> &PickupStats {
        self.resource::<PickupStats>()
    }

    pub fn camera(&self) -> Option<&CameraView> {
        self.resource::<CameraContext>().view()
    }

    /// Seconds left on the spawn timer.
    pub fn spawn_timer(&self) -> f32 {
        self.resource::<SpawnTimer>().remaining
    }

    /// Registry size.
    pub fn active_count(&self) -> usize {
        self.resource::<ActivePickups>().count()
    }

    /// Registered pickups in registration order.
    pub fn active_pickups(&self) -> Vec<Entity> {
        self.resource::<ActivePickups>().iter().collect()
    }

    /// Count pickup entities in the world, registered or not.
    pub fn pickup_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query_filtered::<Entity, With<Pickup>>()
            .iter(world)
            .count()
    }

    pub fn pickup(&self, entity: Entity) -> Option<&Pickup> {
        self.app.world().get::<Pickup>(entity)
    }

    pub fn pickup_state(&self, entity: Entity) -> Option<ReactionState> {
        self.pickup(entity).map(Pickup::state)
    }

    /// Uniform scale as written to the transform.
    pub fn pickup_scale(&self, entity: Entity) -> Option<f32> {
        self.app
            .world()
            .get::<Transform>(entity)
            .map(|t| t.scale.x)
    }

    pub fn pickup_position(&self, entity: Entity) -> Option<Vec3> {
        self.app
            .world()
            .get::<Transform>(entity)
            .map(|t| t.translation)
    }

    pub fn entity_exists(&self, entity: Entity) -> bool {
        self.app.world().entities().contains(entity)
    }

    /// Spawn region for the currently registered camera.
    pub fn spawn_region(&self) -> SpawnRegion {
        spawn_region(self.camera(), self.config().inset_fraction)
    }

    /// Tick in `dt` steps until a pickup is registered; returns it.
    pub fn tick_until_spawn(&mut self, dt: f32) -> Entity {
        let limit = (self.config().spawn_interval / dt).ceil() as u32 + 2;
        for _ in 0..limit {
            if let Some(&entity) = self.active_pickups().last() {
                return entity;
            }
            self.tick_secs(dt);
        }
        self.active_pickups()
            .last()
            .copied()
            .expect("no pickup spawned within one interval")
    }
}
