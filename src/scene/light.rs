//! Scene lighting: an ambient fill plus one shadow-casting directional light.

use glam::{Mat4, Vec3, Vec4Swizzles};

use crate::color::Color;

/// Flat fill light with no direction.
#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: Color,
}

impl AmbientLight {
    pub fn new(hex: u32) -> Self {
        Self {
            color: Color::from_hex(hex),
        }
    }
}

/// Shadow-map settings for a directional light.
#[derive(Debug, Clone, Copy)]
pub struct ShadowConfig {
    /// Shadow map resolution (square)
    pub map_size: u32,
    pub near: f32,
    pub far: f32,
    /// Half-width of the orthographic shadow frustum
    pub extent: f32,
    /// PCF blur radius in texels
    pub radius: f32,
    /// Depth comparison bias to suppress acne
    pub bias: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            map_size: 512,
            near: 0.1,
            far: 200.0,
            extent: 10.0,
            radius: 4.0,
            bias: 0.0005,
        }
    }
}

/// Sun-style light. The position only fixes the shadow frustum and the
/// direction (position toward target); the light itself has no falloff.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub cast_shadow: bool,
    pub shadow: ShadowConfig,
}

impl DirectionalLight {
    pub fn new(hex: u32, position: Vec3) -> Self {
        Self {
            color: Color::from_hex(hex),
            intensity: 1.0,
            position,
            target: Vec3::ZERO,
            cast_shadow: false,
            shadow: ShadowConfig::default(),
        }
    }

    /// Direction the light travels, normalized.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// View-projection of the light's orthographic shadow camera.
    pub fn view_projection(&self) -> Mat4 {
        let extent = self.shadow.extent;
        let projection = Mat4::orthographic_rh(
            -extent,
            extent,
            -extent,
            extent,
            self.shadow.near,
            self.shadow.far,
        );
        let view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
        projection * view
    }
}
