use bevy::prelude::*;

pub mod camera_context;
pub mod config;
pub mod error;
pub mod events;
pub mod hit_test;
pub mod pickup;
pub mod pickup_rng;
pub mod registry;
pub mod spawn_region;
pub mod spawner;
pub mod stats;
pub mod tween;

#[cfg(test)]
pub mod test_harness;

use camera_context::CameraContext;
use config::PickupConfig;
use registry::ActivePickups;
use stats::PickupStats;

// ---------------------------------------------------------------------------
// Frame order
// ---------------------------------------------------------------------------

/// Per-frame phases of the pickup lifecycle, chained in this order.
///
/// `Spawn` runs after `Reaction` so a pickup destroyed this frame frees its
/// slot for the scheduler in the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupSet {
    /// The rendering layer publishes the active camera into `CameraContext`.
    PublishCamera,
    /// Pointer presses are hit-tested and forwarded to pickups.
    Input,
    /// Idle bob and spin.
    Motion,
    /// Pop/fade tweens and teardown.
    Reaction,
    /// Spawn scheduler.
    Spawn,
    /// Registry reconciliation.
    Cleanup,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Core pickup lifecycle. Insert a custom `PickupConfig` (and optionally a
/// seeded `PickupRng`) before adding this plugin.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = validated_config(app.world().get_resource::<PickupConfig>());
        app.insert_resource(config);

        app.configure_sets(
            Update,
            (
                PickupSet::PublishCamera,
                PickupSet::Input,
                PickupSet::Motion,
                PickupSet::Reaction,
                PickupSet::Spawn,
                PickupSet::Cleanup,
            )
                .chain(),
        );

        app.init_resource::<ActivePickups>()
            .init_resource::<PickupStats>()
            .init_resource::<CameraContext>()
            .add_systems(
                Update,
                registry::forget_despawned_pickups.in_set(PickupSet::Cleanup),
            );

        app.add_plugins((
            events::PickupEventsPlugin,
            pickup_rng::PickupRngPlugin,
            hit_test::HitTestPlugin,
            pickup::PickupPlugin,
            spawner::SpawnerPlugin,
        ));
    }
}

/// The inserted config if it passes validation, otherwise the defaults.
fn validated_config(inserted: Option<&PickupConfig>) -> PickupConfig {
    let Some(config) = inserted else {
        return PickupConfig::default();
    };
    match config.validate() {
        Ok(()) => config.clone(),
        Err(e) => {
            warn!("{e}; using default pickup config");
            PickupConfig::default()
        }
    }
}
