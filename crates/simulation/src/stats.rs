use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Running totals for the session.
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupStats {
    pub spawned: u32,
    pub collected: u32,
    /// Spawn cycles skipped because the pickup could not be created.
    pub failed_spawns: u32,
}
