//! Static scene: sky colour, sun, ambient fill and the ground plane.

use bevy::prelude::*;

use simulation::config::GROUND_Y;

pub const SKY_COLOR: Color = Color::srgb(0x87 as f32 / 255.0, 0xce as f32 / 255.0, 0xeb as f32 / 255.0);
pub const GROUND_COLOR: Color = Color::srgb(0x7f as f32 / 255.0, 0xc7 as f32 / 255.0, 0x7f as f32 / 255.0);
const GROUND_SIZE: f32 = 100.0;

pub fn setup_lighting(mut commands: Commands) {
    // Warm ambient fill
    commands.insert_resource(AmbientLight {
        color: Color::srgb(1.0, 0.97, 0.92),
        brightness: 300.0,
    });

    // Sun above and to the side, aimed at the origin
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 0.98, 0.94),
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun"),
    ));
}

pub fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 0.8,
            metallic: 0.2,
            ..default()
        })),
        Transform::from_xyz(0.0, GROUND_Y, 0.0),
        Name::new("Ground"),
    ));
}

