//! Surface materials for the demo's three shading modes.

use crate::color::Color;

/// Phong highlight exponent used when none is given.
const DEFAULT_SHININESS: f32 = 30.0;
/// Dim highlight for phong surfaces, matching the muted default specular
/// of the material this mode mimics.
const PHONG_SPECULAR: f32 = 0.2;

/// Shading mode for a mesh surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialKind {
    /// Diffuse only, no highlight
    Lambert,
    /// Diffuse plus a classic specular highlight
    Phong { shininess: f32 },
    /// Rough-surface material; roughness in [0, 1], 0 = mirror-smooth
    Standard { roughness: f32 },
}

#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub color: Color,
    pub kind: MaterialKind,
}

impl Material {
    pub fn lambert(hex: u32) -> Self {
        Self {
            color: Color::from_hex(hex),
            kind: MaterialKind::Lambert,
        }
    }

    pub fn phong(hex: u32) -> Self {
        Self {
            color: Color::from_hex(hex),
            kind: MaterialKind::Phong {
                shininess: DEFAULT_SHININESS,
            },
        }
    }

    pub fn standard(hex: u32, roughness: f32) -> Self {
        Self {
            color: Color::from_hex(hex),
            kind: MaterialKind::Standard {
                roughness: roughness.clamp(0.0, 1.0),
            },
        }
    }

    /// Reduce the shading mode to the (specular_strength, shininess) pair
    /// the forward shader consumes.
    pub fn specular_params(&self) -> (f32, f32) {
        match self.kind {
            MaterialKind::Lambert => (0.0, 1.0),
            MaterialKind::Phong { shininess } => (PHONG_SPECULAR, shininess),
            MaterialKind::Standard { roughness } => {
                let gloss = 1.0 - roughness;
                (gloss, gloss * 128.0)
            }
        }
    }
}
