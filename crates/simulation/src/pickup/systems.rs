use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::config::PickupConfig;
use crate::events::{PickupCollected, PickupHit};
use crate::registry::ActivePickups;
use crate::stats::PickupStats;
use crate::PickupSet;

use super::reaction::{ReactionState, ReactionStep};
use super::types::Pickup;

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Bob and spin every live pickup.
///
/// Keeps running through the reaction: it only touches translation and
/// rotation, while the reaction owns scale.
pub fn animate_idle_pickups(
    time: Res<Time>,
    config: Res<PickupConfig>,
    mut pickups: Query<(&mut Pickup, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (mut pickup, mut transform) in &mut pickups {
        if pickup.state() == ReactionState::Destroyed {
            continue;
        }
        pickup.elapsed += dt;
        pickup.yaw = (pickup.yaw + config.spin_speed * dt).rem_euclid(TAU);

        let bob = (pickup.elapsed * config.bob_speed).sin() * config.bob_height;
        transform.translation.y = pickup.initial_y + bob;
        transform.rotation = Quat::from_rotation_y(pickup.yaw);
    }
}

/// Forward hit notifications to each pickup's state machine. Repeated hits
/// on a pickup that already reacted are ignored.
pub fn receive_pickup_hits(mut hits: EventReader<PickupHit>, mut pickups: Query<&mut Pickup>) {
    for hit in hits.read() {
        let Ok(mut pickup) = pickups.get_mut(hit.entity) else {
            continue;
        };
        if pickup.reaction.trigger() {
            debug!("Pickup {:?} hit at distance {:.2}", hit.entity, hit.distance);
        }
    }
}

/// Step the pop/fade tweens, write the scale, and tear down pickups whose
/// fade completed.
pub fn advance_pickup_reactions(
    mut commands: Commands,
    time: Res<Time>,
    mut active: ResMut<ActivePickups>,
    mut stats: ResMut<PickupStats>,
    mut collected: EventWriter<PickupCollected>,
    mut pickups: Query<(Entity, &mut Pickup, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (entity, mut pickup, mut transform) in &mut pickups {
        let step = pickup.reaction.advance(dt);
        if step == ReactionStep::Unchanged {
            continue;
        }
        transform.scale = Vec3::splat(pickup.reaction.scale());

        if step == ReactionStep::Finished
            && teardown_pickup(&mut commands, &mut active, entity, &mut pickup)
        {
            stats.collected += 1;
            collected.send(PickupCollected { entity });
        }
    }
}

/// Release everything a pickup holds: registry membership, then the entity
/// with its collision volume and visual child. Runs at most once per pickup.
pub(crate) fn teardown_pickup(
    commands: &mut Commands,
    active: &mut ActivePickups,
    entity: Entity,
    pickup: &mut Pickup,
) -> bool {
    if !pickup.release() {
        return false;
    }
    active.remove(entity);
    commands.entity(entity).despawn_recursive();
    true
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct PickupPlugin;

impl Plugin for PickupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, receive_pickup_hits.in_set(PickupSet::Input))
            .add_systems(Update, animate_idle_pickups.in_set(PickupSet::Motion))
            .add_systems(Update, advance_pickup_reactions.in_set(PickupSet::Reaction));
    }
}
