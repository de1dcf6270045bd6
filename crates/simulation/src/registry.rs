//! Set of live pickups.
//!
//! A pickup is registered when it is spawned and deregistered when its
//! teardown begins. The scheduler only looks at `count()`.

use bevy::prelude::*;

use crate::pickup::Pickup;

#[derive(Resource, Default, Debug, Clone)]
pub struct ActivePickups {
    members: Vec<Entity>,
}

impl ActivePickups {
    /// Register a pickup. Returns `false` if it was already present.
    pub fn add(&mut self, entity: Entity) -> bool {
        if self.members.contains(&entity) {
            return false;
        }
        self.members.push(entity);
        true
    }

    /// Deregister a pickup. Returns `false` if it was not a member.
    pub fn remove(&mut self, entity: Entity) -> bool {
        let Some(index) = self.members.iter().position(|e| *e == entity) else {
            return false;
        };
        self.members.remove(index);
        true
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.members.contains(&entity)
    }

    /// Members in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.members.iter().copied()
    }
}

/// Drop registry entries for pickups despawned by something other than their
/// own teardown (scene reset, debug tools).
pub fn forget_despawned_pickups(
    mut removed: RemovedComponents<Pickup>,
    mut active: ResMut<ActivePickups>,
) {
    for entity in removed.read() {
        if active.remove(entity) {
            warn!("Pickup {entity:?} was despawned without teardown; deregistered");
        }
    }
}
