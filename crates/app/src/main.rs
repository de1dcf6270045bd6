use bevy::prelude::*;
use bevy::window::PresentMode;

use simulation::pickup_rng::PickupRng;

mod config_loader;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Pickups".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    // Loaded after DefaultPlugins so LogPlugin is live, and inserted BEFORE
    // SimulationPlugin, which validates the config and sizes the spawn timer.
    app.insert_resource(config_loader::load_config_from_env());
    if let Some(seed) = config_loader::seed_from_env() {
        info!("Seeding pickup RNG with {seed}");
        app.insert_resource(PickupRng::from_seed_u64(seed));
    }

    app.add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    app.run();
}
