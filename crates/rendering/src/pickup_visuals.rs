//! Pickup prefab assets and the collision-box debug overlay.

use bevy::prelude::*;

use simulation::pickup::{CollisionVolume, Pickup};
use simulation::spawner::PickupPrefab;

const GEM_RADIUS: f32 = 0.5;
// Low sector/stack counts give the sphere a faceted, gem-like look.
const GEM_SECTORS: u32 = 6;
const GEM_STACKS: u32 = 4;

/// Build the gem mesh and material and register them as the spawn template.
pub fn register_pickup_prefab(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(GEM_RADIUS).mesh().uv(GEM_SECTORS, GEM_STACKS));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.84, 0.0),
        emissive: LinearRgba::rgb(0.4, 0.3, 0.0),
        metallic: 0.6,
        perceptual_roughness: 0.3,
        ..default()
    });
    commands.insert_resource(PickupPrefab { mesh, material });
    info!("Pickup prefab registered");
}

// =============================================================================
// Collision overlay (F3)
// =============================================================================

#[derive(Resource, Debug, Default)]
pub struct CollisionGizmos {
    pub enabled: bool,
}

pub fn toggle_collision_gizmos(
    keys: Res<ButtonInput<KeyCode>>,
    mut gizmos: ResMut<CollisionGizmos>,
) {
    if keys.just_pressed(KeyCode::F3) {
        gizmos.enabled = !gizmos.enabled;
        info!(
            "Collision overlay {}",
            if gizmos.enabled { "on" } else { "off" }
        );
    }
}

/// Wireframe of a pickup's collision box in world space.
pub fn collision_box_transform(transform: &Transform, volume: &CollisionVolume) -> Transform {
    Transform {
        translation: transform.translation,
        rotation: transform.rotation,
        scale: transform.scale * volume.half_extents * 2.0,
    }
}

pub fn draw_collision_gizmos(
    overlay: Res<CollisionGizmos>,
    pickups: Query<(&Transform, &CollisionVolume, &Pickup)>,
    mut gizmos: Gizmos,
) {
    if !overlay.enabled {
        return;
    }
    for (transform, volume, pickup) in &pickups {
        let color = if pickup.is_hittable() {
            Color::srgb(0.2, 1.0, 0.2)
        } else {
            Color::srgb(1.0, 0.3, 0.2)
        };
        gizmos.cuboid(collision_box_transform(transform, volume), color);
    }
}
