use crate::camera::PerspectiveCamera;
use crate::scene::{MeshInstance, Scene};

/// Per-frame uniform buffer data for the GPU.
/// Field order matches the WGSL struct; keep vec3s padded to 16 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub view_proj: [[f32; 4]; 4],
    pub light_view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub _pad0: f32,
    pub ambient_color: [f32; 3],
    pub _pad1: f32,
    pub light_color: [f32; 3],
    pub light_intensity: f32,
    pub light_direction: [f32; 3],
    pub _pad2: f32,
    pub fog_color: [f32; 3],
    pub fog_near: f32,
    pub fog_far: f32,
    /// 1.0 when fog applies, 0.0 otherwise
    pub fog_enabled: f32,
    /// PCF blur radius in shadow-map texels
    pub shadow_radius: f32,
    pub shadow_bias: f32,
}

impl FrameUniform {
    /// Gather camera, lighting, and fog state into one upload. Colors go
    /// to the GPU in linear space; the surface format handles the sRGB
    /// transfer on output.
    pub fn compose(camera: &PerspectiveCamera, scene: &Scene) -> Self {
        let light = &scene.directional;

        let (fog_color, fog_near, fog_far, fog_enabled) = match scene.fog {
            Some(fog) => (fog.color.to_linear().to_array(), fog.near, fog.far, 1.0),
            None => ([0.0; 3], 0.0, 1.0, 0.0),
        };

        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            light_view_proj: light.view_projection().to_cols_array_2d(),
            camera_position: camera.position.to_array(),
            _pad0: 0.0,
            ambient_color: scene.ambient.color.to_linear().to_array(),
            _pad1: 0.0,
            light_color: light.color.to_linear().to_array(),
            light_intensity: light.intensity,
            light_direction: light.direction().to_array(),
            _pad2: 0.0,
            fog_color,
            fog_near,
            fog_far,
            fog_enabled,
            shadow_radius: light.shadow.radius,
            shadow_bias: light.shadow.bias,
        }
    }
}

/// Per-mesh uniform buffer data for the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub specular_strength: f32,
    pub shininess: f32,
    /// 1.0 when the surface samples the shadow map
    pub receive_shadow: f32,
    pub _pad: [f32; 2],
}

impl ModelUniform {
    pub fn from_instance(mesh: &MeshInstance) -> Self {
        let (specular_strength, shininess) = mesh.material.specular_params();

        Self {
            model: mesh.transform.matrix().to_cols_array_2d(),
            color: mesh.material.color.to_linear().to_array(),
            specular_strength,
            shininess,
            receive_shadow: if mesh.receive_shadow { 1.0 } else { 0.0 },
            _pad: [0.0; 2],
        }
    }
}
