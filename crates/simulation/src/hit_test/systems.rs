use bevy::prelude::*;

use crate::camera_context::{screen_to_ndc, CameraContext};
use crate::events::{PickupHit, PointerPressed};
use crate::pickup::{receive_pickup_hits, CollisionVolume, Pickup};
use crate::PickupSet;

use super::ray::find_nearest_hit;

/// Cast a ray for each pointer press and report the nearest pickup it hits.
pub fn hit_test_pointer_presses(
    mut presses: EventReader<PointerPressed>,
    camera: Res<CameraContext>,
    pickups: Query<(Entity, &Pickup, &Transform, &CollisionVolume)>,
    mut hits: EventWriter<PickupHit>,
) {
    for press in presses.read() {
        let Some(view) = camera.view() else {
            debug!("Pointer press ignored: no camera registered");
            continue;
        };
        let Some(ndc) = screen_to_ndc(press.screen_pos, press.viewport_size) else {
            continue;
        };
        let Some(ray) = view.ray_from_ndc(ndc) else {
            continue;
        };
        if let Some((entity, distance)) = find_nearest_hit(ray, pickups.iter()) {
            hits.send(PickupHit { entity, distance });
        }
    }
}

pub struct HitTestPlugin;

impl Plugin for HitTestPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            hit_test_pointer_presses
                .in_set(PickupSet::Input)
                .before(receive_pickup_hits),
        );
    }
}
