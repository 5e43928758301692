use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Simulation;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Pixels per body-space unit, divided by the box half-width
#[derive(Resource)]
struct ViewScale(f32);

/// Screen half-extent of the simulation box in pixels
const HALF_EXTENT: f32 = 300.0;
const BODY_RADIUS: f32 = 6.0;

const BODY_COLORS: [Color; 4] = [
    Color::srgb(1.0, 0.0, 0.0),
    Color::srgb(0.0, 1.0, 0.0),
    Color::srgb(0.0, 0.0, 1.0),
    Color::srgb(1.0, 0.0, 1.0),
];

pub fn run_2d(simulation: Simulation) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", simulation.system().len());

    let scale = ViewScale(HALF_EXTENT / simulation.parameters().bound as f32);

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(simulation)
        .insert_resource(scale)
        // main installs the global subscriber before the scenario is loaded
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Three Body".into(),
                ..default()
            }),
            ..default()
        }).disable::<LogPlugin>())
        .add_systems(Startup, setup_bodies_system)
        // positions are read only after the whole frame has been integrated
        .add_systems(Update, (physics_step_system, sync_transforms_system, draw_bounds_system).chain())
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    simulation: Res<Simulation>,
    scale: Res<ViewScale>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    let circle = Mesh2dHandle(meshes.add(Circle::new(BODY_RADIUS)));

    for (i, [x, y]) in simulation.snapshot().into_iter().enumerate() {
        let color = BODY_COLORS[i % BODY_COLORS.len()];

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: circle.clone(),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(x * scale.0, y * scale.0, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    info!("viewer: spawned {} bodies", simulation.system().len());
}

fn physics_step_system(time: Res<Time>, mut simulation: ResMut<Simulation>) {
    simulation.advance(time.delta_seconds_f64());
}

fn sync_transforms_system(
    simulation: Res<Simulation>,
    scale: Res<ViewScale>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    let positions = simulation.snapshot();
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some([x, y]) = positions.get(*i) {
            transform.translation.x = x * scale.0;
            transform.translation.y = y * scale.0;
        }
    }
}

fn draw_bounds_system(mut gizmos: Gizmos) {
    gizmos.rect_2d(Vec2::ZERO, 0.0, Vec2::splat(2.0 * HALF_EXTENT), Color::srgb(0.2, 0.2, 0.4));
}
