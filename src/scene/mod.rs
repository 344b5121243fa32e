//! Scene description: a flat list of meshes plus lights, fog, and the
//! background color. Flat is enough here - nothing in the demo parents
//! one transform to another.

pub mod geometry;
pub mod light;
pub mod material;

pub use geometry::{
    box_geometry, plane_geometry, torus_knot_geometry, unit_box, Geometry, Vertex,
};
pub use light::{AmbientLight, DirectionalLight, ShadowConfig};
pub use material::{Material, MaterialKind};

use glam::{EulerRot, Mat4, Vec3};

use crate::color::Color;

/// Position plus XYZ-ordered Euler rotation. Nothing in the demo scales,
/// so the model matrix stays rigid and doubles as the normal transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}

/// Distance fog, blended in with smoothstep between near and far.
#[derive(Debug, Clone, Copy)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

impl Fog {
    pub fn new(hex: u32, near: f32, far: f32) -> Self {
        Self {
            color: Color::from_hex(hex),
            near,
            far,
        }
    }
}

/// One renderable mesh: geometry + material + placement + shadow flags.
#[derive(Debug, Clone)]
pub struct MeshInstance {
    pub label: &'static str,
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl MeshInstance {
    pub fn new(label: &'static str, geometry: Geometry, material: Material) -> Self {
        Self {
            label,
            geometry,
            material,
            transform: Transform::default(),
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

/// Index of a mesh inside a scene. Only minted by [`Scene::add`], so a
/// handle is always valid for the scene that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshHandle(usize);

pub struct Scene {
    pub background: Color,
    pub fog: Option<Fog>,
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    meshes: Vec<MeshInstance>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            background: Color::from_hex(0x000000),
            fog: None,
            ambient: AmbientLight::new(0xffffff),
            directional: DirectionalLight::new(0xffffff, Vec3::new(4.0, 10.0, 4.0)),
            meshes: Vec::new(),
        }
    }

    pub fn add(&mut self, mesh: MeshInstance) -> MeshHandle {
        self.meshes.push(mesh);
        MeshHandle(self.meshes.len() - 1)
    }

    pub fn mesh(&self, handle: MeshHandle) -> &MeshInstance {
        &self.meshes[handle.0]
    }

    pub fn mesh_mut(&mut self, handle: MeshHandle) -> &mut MeshInstance {
        &mut self.meshes[handle.0]
    }

    pub fn meshes(&self) -> &[MeshInstance] {
        &self.meshes
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn transform_translates() {
        let transform = Transform::at(Vec3::new(1.0, 2.0, 3.0));
        let moved = transform.matrix().transform_point3(Vec3::ZERO);
        assert!((moved - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn transform_rotates_about_x() {
        let transform = Transform {
            position: Vec3::ZERO,
            rotation: Vec3::new(FRAC_PI_2, 0.0, 0.0),
        };
        let rotated = transform.matrix().transform_vector3(Vec3::Y);
        assert!((rotated - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn ground_rotation_turns_plane_normal_upward() {
        // A +Z-facing plane rotated -pi/2 about X faces +Y
        let transform = Transform {
            position: Vec3::new(0.0, -2.0, 0.0),
            rotation: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
        };
        let normal = transform.matrix().transform_vector3(Vec3::Z);
        assert!((normal - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn scene_handles_address_their_mesh() {
        let mut scene = Scene::new();
        let cube = scene.add(MeshInstance::new(
            "cube",
            unit_box(),
            Material::phong(0x0000ff),
        ));
        let plane = scene.add(MeshInstance::new(
            "ground",
            plane_geometry(10.0, 10.0),
            Material::lambert(0xf8f8f8),
        ));

        assert_eq!(scene.mesh_count(), 2);
        assert_eq!(scene.mesh(cube).label, "cube");
        assert_eq!(scene.mesh(plane).label, "ground");

        scene.mesh_mut(cube).transform.position.x = -1.0;
        assert_eq!(scene.mesh(cube).transform.position.x, -1.0);
        assert_eq!(scene.mesh(plane).transform.position.x, 0.0);
    }
}
