//! Procedural geometry for the demo meshes.
//!
//! Indexed triangle lists with counter-clockwise front faces. The plane
//! lies in the XY plane facing +Z; orientation in the world is the mesh
//! transform's job.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A vertex in a mesh
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    /// Position in world units
    pub position: [f32; 3],
    /// Surface normal (normalized)
    pub normal: [f32; 3],
    /// UV coordinates
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, uv: [f32; 2]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize().to_array(),
            uv,
        }
    }

    pub fn position_vec3(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal_vec3(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Indexed triangle mesh data
#[derive(Debug, Clone)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned quad with a single normal, CCW as seen from the normal side
    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let base = self.vertices.len() as u32;

        for (corner, uv) in corners.iter().zip(uvs) {
            self.vertices.push(Vertex::new(*corner, normal, uv));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Box centered at the origin, four vertices per face so normals stay flat.
pub fn box_geometry(width: f32, height: f32, depth: f32) -> Geometry {
    let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);

    let mut geometry = Geometry {
        vertices: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };

    // +Z
    geometry.push_quad(
        [
            Vec3::new(-hw, -hh, hd),
            Vec3::new(hw, -hh, hd),
            Vec3::new(hw, hh, hd),
            Vec3::new(-hw, hh, hd),
        ],
        Vec3::Z,
    );
    // -Z
    geometry.push_quad(
        [
            Vec3::new(hw, -hh, -hd),
            Vec3::new(-hw, -hh, -hd),
            Vec3::new(-hw, hh, -hd),
            Vec3::new(hw, hh, -hd),
        ],
        -Vec3::Z,
    );
    // +X
    geometry.push_quad(
        [
            Vec3::new(hw, -hh, hd),
            Vec3::new(hw, -hh, -hd),
            Vec3::new(hw, hh, -hd),
            Vec3::new(hw, hh, hd),
        ],
        Vec3::X,
    );
    // -X
    geometry.push_quad(
        [
            Vec3::new(-hw, -hh, -hd),
            Vec3::new(-hw, -hh, hd),
            Vec3::new(-hw, hh, hd),
            Vec3::new(-hw, hh, -hd),
        ],
        -Vec3::X,
    );
    // +Y
    geometry.push_quad(
        [
            Vec3::new(-hw, hh, hd),
            Vec3::new(hw, hh, hd),
            Vec3::new(hw, hh, -hd),
            Vec3::new(-hw, hh, -hd),
        ],
        Vec3::Y,
    );
    // -Y
    geometry.push_quad(
        [
            Vec3::new(-hw, -hh, -hd),
            Vec3::new(hw, -hh, -hd),
            Vec3::new(hw, -hh, hd),
            Vec3::new(-hw, -hh, hd),
        ],
        -Vec3::Y,
    );

    geometry
}

/// Unit cube, the demo's cube geometry.
pub fn unit_box() -> Geometry {
    box_geometry(1.0, 1.0, 1.0)
}

/// Flat plane in the XY plane facing +Z, width along X and height along Y.
pub fn plane_geometry(width: f32, height: f32) -> Geometry {
    let (hw, hh) = (width * 0.5, height * 0.5);

    let mut geometry = Geometry {
        vertices: Vec::with_capacity(4),
        indices: Vec::with_capacity(6),
    };
    geometry.push_quad(
        [
            Vec3::new(-hw, -hh, 0.0),
            Vec3::new(hw, -hh, 0.0),
            Vec3::new(hw, hh, 0.0),
            Vec3::new(-hw, hh, 0.0),
        ],
        Vec3::Z,
    );
    geometry
}

/// Point on the (p,q) torus-knot curve at parameter u.
fn knot_point(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let cu = u.cos();
    let su = u.sin();
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();

    Vec3::new(
        radius * (2.0 + cs) * 0.5 * cu,
        radius * (2.0 + cs) * su * 0.5,
        radius * qu_over_p.sin() * 0.5,
    )
}

/// Tube swept along a (p,q) torus-knot curve.
///
/// The tube frame comes from a forward-difference approximation of the
/// Frenet frame, which is stable everywhere on this closed curve. Vertex
/// rows are (tubular_segments + 1) x (radial_segments + 1) so the seam
/// vertices duplicate cleanly with wrapped UVs.
pub fn torus_knot_geometry(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> Geometry {
    let tau = std::f32::consts::TAU;
    let pf = p as f32;
    let qf = q as f32;

    let mut vertices =
        Vec::with_capacity(((tubular_segments + 1) * (radial_segments + 1)) as usize);
    let mut indices = Vec::with_capacity((tubular_segments * radial_segments * 6) as usize);

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * pf * tau;
        let p1 = knot_point(u, pf, qf, radius);
        let p2 = knot_point(u + 0.01, pf, qf, radius);

        let tangent = p2 - p1;
        let mut frame_normal = p2 + p1;
        let mut frame_binormal = tangent.cross(frame_normal);
        frame_normal = frame_binormal.cross(tangent).normalize();
        frame_binormal = frame_binormal.normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * tau;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();

            let position = p1 + cx * frame_normal + cy * frame_binormal;
            let normal = (position - p1).normalize();
            let uv = [
                i as f32 / tubular_segments as f32,
                j as f32 / radial_segments as f32,
            ];

            vertices.push(Vertex::new(position, normal, uv));
        }
    }

    let ring = radial_segments + 1;
    for i in 1..=tubular_segments {
        for j in 1..=radial_segments {
            let a = ring * (i - 1) + (j - 1);
            let b = ring * i + (j - 1);
            let c = ring * i + j;
            let d = ring * (i - 1) + j;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    Geometry { vertices, indices }
}
