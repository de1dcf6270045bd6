//! Tunables for the pickup lifecycle.
//!
//! The constants are the defaults; `PickupConfig` is the runtime resource that
//! systems read. Insert a customised `PickupConfig` before adding
//! `SimulationPlugin` to override any of them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::PickupError;

/// Seconds between a slot becoming free and the next spawn.
pub const DEFAULT_SPAWN_INTERVAL: f32 = 3.0;
/// Fraction of each axis span trimmed from both sides of the visible region.
pub const DEFAULT_INSET_FRACTION: f32 = 0.15;
pub const DEFAULT_POP_TARGET: f32 = 1.35;
pub const DEFAULT_POP_DURATION: f32 = 0.12;
pub const DEFAULT_FADE_DURATION: f32 = 0.3;
/// Height above the ground plane at which pickups are placed.
pub const DEFAULT_SPAWN_HEIGHT: f32 = 0.5;
/// Maximum number of live pickups before the scheduler stops spawning.
pub const DEFAULT_MAX_ACTIVE: usize = 1;

/// Idle bob frequency (radians of phase per second).
pub const DEFAULT_BOB_SPEED: f32 = 2.0;
/// Idle bob amplitude in world units.
pub const DEFAULT_BOB_HEIGHT: f32 = 0.3;
/// Idle spin rate in radians per second.
pub const DEFAULT_SPIN_SPEED: f32 = 1.5;
/// Edge length of the invisible collision cube used for hit testing.
pub const DEFAULT_COLLISION_SIZE: f32 = 1.5;

/// World-space Y of the ground plane that spawn positions are projected onto.
pub const GROUND_Y: f32 = 0.0;
/// Half extent of the square used when the camera sees no ground at all.
pub const FALLBACK_HALF_EXTENT: f32 = 3.0;

/// Runtime configuration for spawning, idle motion and the pop/fade reaction.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    pub spawn_interval: f32,
    pub inset_fraction: f32,
    pub pop_target: f32,
    pub pop_duration: f32,
    pub fade_duration: f32,
    pub spawn_height: f32,
    pub max_active: usize,
    pub bob_speed: f32,
    pub bob_height: f32,
    pub spin_speed: f32,
    pub collision_size: f32,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            inset_fraction: DEFAULT_INSET_FRACTION,
            pop_target: DEFAULT_POP_TARGET,
            pop_duration: DEFAULT_POP_DURATION,
            fade_duration: DEFAULT_FADE_DURATION,
            spawn_height: DEFAULT_SPAWN_HEIGHT,
            max_active: DEFAULT_MAX_ACTIVE,
            bob_speed: DEFAULT_BOB_SPEED,
            bob_height: DEFAULT_BOB_HEIGHT,
            spin_speed: DEFAULT_SPIN_SPEED,
            collision_size: DEFAULT_COLLISION_SIZE,
        }
    }
}

impl PickupConfig {
    /// Check every field against the ranges the lifecycle relies on.
    pub fn validate(&self) -> Result<(), PickupError> {
        let finite = [
            ("spawn_interval", self.spawn_interval),
            ("inset_fraction", self.inset_fraction),
            ("pop_target", self.pop_target),
            ("pop_duration", self.pop_duration),
            ("fade_duration", self.fade_duration),
            ("spawn_height", self.spawn_height),
            ("bob_speed", self.bob_speed),
            ("bob_height", self.bob_height),
            ("spin_speed", self.spin_speed),
            ("collision_size", self.collision_size),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(PickupError::invalid(field, "must be a finite number"));
            }
        }

        if self.spawn_interval < 0.0 {
            return Err(PickupError::invalid("spawn_interval", "must not be negative"));
        }
        // An inset of 0.5 or more collapses (or inverts) the region.
        if !(0.0..0.5).contains(&self.inset_fraction) {
            return Err(PickupError::invalid("inset_fraction", "must be in [0, 0.5)"));
        }
        // The pop starts from scale 1.0, so the target can't be below it.
        if self.pop_target < 1.0 {
            return Err(PickupError::invalid("pop_target", "must be at least 1.0"));
        }
        if self.pop_duration < 0.0 {
            return Err(PickupError::invalid("pop_duration", "must not be negative"));
        }
        if self.fade_duration < 0.0 {
            return Err(PickupError::invalid("fade_duration", "must not be negative"));
        }
        if self.collision_size <= 0.0 {
            return Err(PickupError::invalid("collision_size", "must be positive"));
        }
        if self.max_active == 0 {
            return Err(PickupError::invalid("max_active", "must be at least 1"));
        }
        Ok(())
    }

    /// Total time from a confirmed hit until the pickup is destroyed.
    pub fn reaction_duration(&self) -> f32 {
        self.pop_duration + self.fade_duration
    }
}
