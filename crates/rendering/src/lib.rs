use bevy::prelude::*;

use simulation::PickupSet;

pub mod camera;
pub mod input;
pub mod pickup_visuals;
pub mod scene;

use pickup_visuals::CollisionGizmos;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(scene::SKY_COLOR))
            .init_resource::<CollisionGizmos>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    scene::setup_lighting,
                    scene::spawn_ground,
                    pickup_visuals::register_pickup_prefab,
                ),
            )
            .add_systems(
                Update,
                camera::apply_orbit_camera.before(PickupSet::PublishCamera),
            )
            .add_systems(
                Update,
                (camera::publish_camera_context, input::capture_pointer_presses)
                    .chain()
                    .in_set(PickupSet::PublishCamera),
            )
            .add_systems(
                Update,
                (
                    pickup_visuals::toggle_collision_gizmos,
                    pickup_visuals::draw_collision_gizmos,
                )
                    .chain()
                    .after(PickupSet::Reaction),
            );
    }
}
