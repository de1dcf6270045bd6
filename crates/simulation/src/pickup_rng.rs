//! Deterministic RNG resource for spawn placement.
//!
//! Wraps `ChaCha8Rng` so identical seeds produce identical spawn positions and
//! initial yaws. Systems take `ResMut<PickupRng>` instead of calling
//! `rand::thread_rng()`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

#[derive(Resource)]
pub struct PickupRng(pub ChaCha8Rng);

impl Default for PickupRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl PickupRng {
    /// Create a new `PickupRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

pub struct PickupRngPlugin;

impl Plugin for PickupRngPlugin {
    fn build(&self, app: &mut App) {
        // Keeps a seeded rng inserted ahead of the plugin.
        app.init_resource::<PickupRng>();
    }
}
