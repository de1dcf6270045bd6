//! Spawn scheduler.
//!
//! Counts down while the registry has room, and on expiry places one pickup
//! at a random point inside the camera's current ground footprint.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::camera_context::{CameraContext, CameraView};
use crate::config::PickupConfig;
use crate::error::PickupError;
use crate::events::PickupSpawned;
use crate::pickup::{CollisionVolume, Pickup, PickupVisual, ReactionSettings};
use crate::pickup_rng::PickupRng;
use crate::registry::ActivePickups;
use crate::spawn_region::spawn_region;
use crate::stats::PickupStats;
use crate::PickupSet;

// =============================================================================
// Resources
// =============================================================================

/// Template every pickup is instantiated from. Registered by the rendering
/// layer at startup; spawning without it fails with `MissingPrefab`.
#[derive(Resource, Debug, Clone)]
pub struct PickupPrefab {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Seconds until the next spawn attempt.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SpawnTimer {
    pub remaining: f32,
}

impl SpawnTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            remaining: interval,
        }
    }
}

impl FromWorld for SpawnTimer {
    fn from_world(world: &mut World) -> Self {
        let interval = world
            .get_resource::<PickupConfig>()
            .map(|c| c.spawn_interval)
            .unwrap_or_default();
        Self::new(interval)
    }
}

// =============================================================================
// Spawning
// =============================================================================

/// Instantiate one pickup inside the camera's spawn region.
///
/// The root entity carries the state machine and the collision volume; the
/// visible mesh is a child so teardown removes both together.
pub fn spawn_pickup(
    commands: &mut Commands,
    prefab: Option<&PickupPrefab>,
    config: &PickupConfig,
    view: Option<&CameraView>,
    rng: &mut impl Rng,
) -> Result<(Entity, Vec3), PickupError> {
    let prefab = prefab.ok_or(PickupError::MissingPrefab)?;

    let point = spawn_region(view, config.inset_fraction).random_point(rng);
    let position = Vec3::new(point.x, config.spawn_height, point.y);
    let yaw = rng.gen_range(0.0..TAU);

    let entity = commands
        .spawn((
            Pickup::new(position.y, yaw, ReactionSettings::from(config)),
            CollisionVolume::cube(config.collision_size),
            Transform::from_translation(position).with_rotation(Quat::from_rotation_y(yaw)),
            Visibility::default(),
            Name::new("Pickup"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(prefab.mesh.clone()),
                MeshMaterial3d(prefab.material.clone()),
                PickupVisual,
            ));
        })
        .id();

    Ok((entity, position))
}

// =============================================================================
// Systems
// =============================================================================

#[allow(clippy::too_many_arguments)]
pub fn tick_spawn_timer(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<PickupConfig>,
    camera: Res<CameraContext>,
    prefab: Option<Res<PickupPrefab>>,
    mut timer: ResMut<SpawnTimer>,
    mut rng: ResMut<PickupRng>,
    mut active: ResMut<ActivePickups>,
    mut stats: ResMut<PickupStats>,
    mut spawned: EventWriter<PickupSpawned>,
) {
    if active.count() >= config.max_active {
        return;
    }
    timer.remaining -= time.delta_secs();
    if timer.remaining > 0.0 {
        return;
    }
    timer.remaining = config.spawn_interval;

    match spawn_pickup(
        &mut commands,
        prefab.as_deref(),
        &config,
        camera.view(),
        &mut rng.0,
    ) {
        Ok((entity, position)) => {
            active.add(entity);
            stats.spawned += 1;
            spawned.send(PickupSpawned { entity, position });
            debug!("Spawned pickup {entity:?} at {position}");
        }
        Err(e) => {
            stats.failed_spawns += 1;
            error!("Failed to spawn pickup: {e}");
        }
    }
}

pub struct SpawnerPlugin;

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnTimer>()
            .add_systems(Update, tick_spawn_timer.in_set(PickupSet::Spawn));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn_region::SpawnRegion;

    #[test]
    fn test_timer_from_world_uses_config_interval() {
        let mut world = World::new();
        world.insert_resource(PickupConfig {
            spawn_interval: 5.0,
            ..Default::default()
        });
        assert_eq!(SpawnTimer::from_world(&mut world).remaining, 5.0);
    }

    #[test]
    fn test_timer_from_world_without_config() {
        let mut world = World::new();
        assert_eq!(SpawnTimer::from_world(&mut world).remaining, 0.0);
    }

    #[derive(Resource, Default)]
    struct Outcome(Option<Result<(Entity, Vec3), PickupError>>);

    fn spawn_once(
        mut commands: Commands,
        prefab: Option<Res<PickupPrefab>>,
        mut rng: ResMut<PickupRng>,
        mut outcome: ResMut<Outcome>,
    ) {
        let config = PickupConfig::default();
        outcome.0 = Some(spawn_pickup(
            &mut commands,
            prefab.as_deref(),
            &config,
            None,
            &mut rng.0,
        ));
    }

    fn spawn_app(with_prefab: bool) -> App {
        let mut app = App::new();
        app.init_resource::<PickupRng>()
            .init_resource::<Outcome>()
            .add_systems(Update, spawn_once);
        if with_prefab {
            app.insert_resource(PickupPrefab {
                mesh: Handle::default(),
                material: Handle::default(),
            });
        }
        app
    }

    #[test]
    fn test_spawn_without_prefab_fails() {
        let mut app = spawn_app(false);
        app.update();
        let outcome = app.world_mut().resource_mut::<Outcome>().0.take();
        assert_eq!(outcome.unwrap().unwrap_err(), PickupError::MissingPrefab);
        let world = app.world_mut();
        assert_eq!(world.query::<&Pickup>().iter(world).count(), 0);
    }

    #[test]
    fn test_spawn_builds_pickup_with_visual_child() {
        let mut app = spawn_app(true);
        app.update();
        let (entity, position) = app
            .world_mut()
            .resource_mut::<Outcome>()
            .0
            .take()
            .unwrap()
            .unwrap();

        // No camera: the point comes from the fallback square.
        assert!(SpawnRegion::FALLBACK.contains(position.x, position.z));
        assert_eq!(position.y, 0.5);

        let world = app.world();
        let pickup = world.get::<Pickup>(entity).unwrap();
        assert_eq!(pickup.initial_y, 0.5);
        assert!((0.0..TAU).contains(&pickup.yaw));
        assert_eq!(
            world.get::<CollisionVolume>(entity).copied(),
            Some(CollisionVolume::cube(1.5))
        );
        let children = world.get::<Children>(entity).unwrap();
        assert_eq!(children.len(), 1);
        assert!(world.get::<PickupVisual>(children[0]).is_some());
    }
}
