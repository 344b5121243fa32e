//! The per-frame animation step: spin the cubes and the knot, advance the
//! bounce phase, and swing the first cube along its circular/absolute-sine
//! trajectory. Increments are per frame, not time-scaled - the motion is
//! tied to the render callback the way the demo defines it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::scene::{MeshHandle, Scene};

/// Fixed spin the bouncing cube gets on top of the tunable cube speed.
const BOUNCE_EXTRA_SPIN: f32 = 0.03;
/// Radius of the bouncing cube's trajectory.
const ORBIT_RADIUS: f32 = 4.0;

/// Live animation parameters, driven by the HUD sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationParams {
    /// Per-frame rotation increment for both cubes
    pub cube_speed: f32,
    /// Per-frame rotation increment for the torus knot
    pub torus_speed: f32,
    /// Per-frame advance of the bounce phase
    pub step_rate: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            cube_speed: 0.01,
            torus_speed: 0.03,
            step_rate: 0.04,
        }
    }
}

/// Handles to the three animated meshes in the demo scene.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedMeshes {
    pub bouncing_cube: MeshHandle,
    pub spinning_cube: MeshHandle,
    pub torus_knot: MeshHandle,
}

/// Phase accumulator for the bounce trajectory.
#[derive(Debug, Default)]
pub struct Animation {
    step: f32,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Apply one frame of animation to the scene.
    pub fn advance(
        &mut self,
        scene: &mut Scene,
        meshes: &AnimatedMeshes,
        params: &AnimationParams,
    ) {
        let spin = params.cube_speed + BOUNCE_EXTRA_SPIN;
        scene.mesh_mut(meshes.bouncing_cube).transform.rotation += Vec3::splat(spin);

        scene.mesh_mut(meshes.spinning_cube).transform.rotation +=
            Vec3::splat(params.cube_speed);

        // The knot counter-rotates on x and z against its y spin
        let knot = scene.mesh_mut(meshes.torus_knot);
        knot.transform.rotation.x -= params.torus_speed;
        knot.transform.rotation.y += params.torus_speed;
        knot.transform.rotation.z -= params.torus_speed;

        self.step += params.step_rate;
        let cube = scene.mesh_mut(meshes.bouncing_cube);
        cube.transform.position.x = ORBIT_RADIUS * self.step.cos();
        cube.transform.position.y = ORBIT_RADIUS * self.step.sin().abs();
    }
}
