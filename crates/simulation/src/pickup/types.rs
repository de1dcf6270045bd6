use bevy::prelude::*;

use super::reaction::{PickupReaction, ReactionSettings, ReactionState};

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// A live, interactable collectible.
#[derive(Component, Debug, Clone)]
pub struct Pickup {
    /// Height the idle bob oscillates around.
    pub initial_y: f32,
    /// Seconds of idle motion accumulated since spawn.
    pub elapsed: f32,
    /// Current yaw in radians; starts from a random baseline.
    pub yaw: f32,
    pub reaction: PickupReaction,
    /// Set once teardown has run so it can never run twice.
    released: bool,
}

impl Pickup {
    pub fn new(initial_y: f32, yaw: f32, settings: ReactionSettings) -> Self {
        Self {
            initial_y,
            elapsed: 0.0,
            yaw,
            reaction: PickupReaction::new(settings),
            released: false,
        }
    }

    pub fn state(&self) -> ReactionState {
        self.reaction.state()
    }

    /// Whether the pickup still accepts hits.
    pub fn is_hittable(&self) -> bool {
        !self.reaction.is_triggered() && !self.released
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Claim the one-shot teardown. Returns `false` if it already ran.
    pub(crate) fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;
        true
    }
}

/// Invisible axis-aligned box, in the pickup's local space, used only for
/// ray hit testing.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CollisionVolume {
    pub half_extents: Vec3,
}

impl CollisionVolume {
    pub fn cube(size: f32) -> Self {
        Self {
            half_extents: Vec3::splat(size * 0.5),
        }
    }
}

/// Marker for the visible mesh child of a pickup.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PickupVisual;
