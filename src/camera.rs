use glam::{Mat4, Vec3, Vec4Swizzles};

/// Perspective camera aimed at a target point, +Y up.
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            fov_y,
            aspect,
            near,
            far,
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_camera() -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::new(75.0, 16.0 / 9.0, 0.1, 1000.0);
        camera.position = Vec3::new(10.0, 2.0, 10.0);
        camera.look_at(Vec3::ZERO);
        camera
    }

    #[test]
    fn view_puts_target_straight_ahead() {
        let camera = demo_camera();
        let in_view = camera.view_matrix().transform_point3(camera.target);

        // Right-handed view space looks down -Z
        assert!(in_view.x.abs() < 1e-4);
        assert!(in_view.y.abs() < 1e-4);
        assert!(in_view.z < 0.0);
    }

    #[test]
    fn target_projects_inside_the_frustum() {
        let camera = demo_camera();
        let clip = camera.view_projection() * camera.target.extend(1.0);
        let ndc = clip.xyz() / clip.w;

        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn point_behind_the_camera_fails_the_w_test() {
        let camera = demo_camera();
        let behind = camera.position + (camera.position - camera.target);
        let clip = camera.view_projection() * behind.extend(1.0);

        assert!(clip.w < 0.0);
    }

    #[test]
    fn set_aspect_tracks_resize_and_ignores_zero() {
        let mut camera = demo_camera();

        camera.set_aspect(800, 600);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);

        camera.set_aspect(0, 600);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }
}
