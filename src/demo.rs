//! The demo scene: two spinning cubes and a torus knot floating over a
//! huge ground plane, a light fog, an ambient fill, and one
//! shadow-casting directional light.

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::animation::AnimatedMeshes;
use crate::color::Color;
use crate::scene::{
    plane_geometry, torus_knot_geometry, unit_box, AmbientLight, DirectionalLight, Fog, Material,
    MeshInstance, Scene,
};

/// Assemble the demo scene. Returns the scene plus handles to the meshes
/// the animation step drives.
pub fn build_demo_scene() -> (Scene, AnimatedMeshes) {
    let mut scene = Scene::new();

    // === Atmosphere ===

    scene.background = Color::from_hex(0xf3f3f3);
    scene.fog = Some(Fog::new(0xf8f8f8, 0.0025, 50.0));

    // === Lights ===

    scene.ambient = AmbientLight::new(0x666666);

    let mut sun = DirectionalLight::new(0xaaaaaa, Vec3::new(5.0, 12.0, 8.0));
    sun.intensity = 1.0;
    sun.cast_shadow = true;
    scene.directional = sun;

    // === Meshes ===

    // Both cubes share one geometry and material
    let cube_geometry = unit_box();
    let cube_material = Material::phong(0x0000ff);

    let mut bouncing_cube =
        MeshInstance::new("bouncing cube", cube_geometry.clone(), cube_material);
    bouncing_cube.transform.position.x = -1.0;
    bouncing_cube.cast_shadow = true;
    let bouncing_cube = scene.add(bouncing_cube);

    let mut spinning_cube = MeshInstance::new("spinning cube", cube_geometry, cube_material);
    spinning_cube.transform.position.x = -4.0;
    spinning_cube.cast_shadow = true;
    let spinning_cube = scene.add(spinning_cube);

    let mut torus_knot = MeshInstance::new(
        "torus knot",
        torus_knot_geometry(0.5, 0.2, 100, 100, 2, 3),
        Material::standard(0x00ff88, 0.1),
    );
    torus_knot.transform.position.x = 2.0;
    torus_knot.cast_shadow = true;
    let torus_knot = scene.add(torus_knot);

    // Ground plane, rotated flat; far larger than the fog can see
    let mut ground = MeshInstance::new(
        "ground",
        plane_geometry(10000.0, 10000.0),
        Material::lambert(0xf8f8f8),
    );
    ground.transform.position = Vec3::new(0.0, -2.0, 0.0);
    ground.transform.rotation = Vec3::new(-FRAC_PI_2, 0.0, 0.0);
    ground.receive_shadow = true;
    scene.add(ground);

    (
        scene,
        AnimatedMeshes {
            bouncing_cube,
            spinning_cube,
            torus_knot,
        },
    )
}
