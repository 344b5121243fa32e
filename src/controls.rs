//! Damped orbit controls: drag to rotate around a target, wheel to dolly.
//!
//! Pointer input accumulates into pending deltas; `update` bleeds them
//! into the camera a damped fraction per frame, so motion keeps coasting
//! briefly after the pointer stops.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use crate::camera::PerspectiveCamera;

/// Keeps the polar angle off the exact poles where look-at degenerates.
const POLE_EPSILON: f32 = 1e-4;
/// Dolly factor per wheel step.
const ZOOM_STEP: f32 = 0.95;
/// Residual motion below this is treated as settled.
const REST_THRESHOLD: f32 = 1e-5;

pub struct OrbitControls {
    pub target: Vec3,
    /// Fraction of the pending deltas applied per frame
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle limits, 0 = straight above the target
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,

    radius: f32,
    /// Azimuth around +Y, measured from +Z toward +X
    theta: f32,
    /// Polar angle from +Y
    phi: f32,

    theta_delta: f32,
    phi_delta: f32,
    scale: f32,

    dragging: bool,
    last_cursor: Option<(f64, f64)>,
}

impl OrbitControls {
    /// Build controls whose spherical state reproduces the camera's
    /// current position exactly.
    pub fn from_camera(camera: &PerspectiveCamera) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length().max(POLE_EPSILON);

        Self {
            target: camera.target,
            damping_factor: 0.05,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
            dragging: false,
            last_cursor: None,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Queue an orbit by a pointer drag of (dx, dy) pixels. A full
    /// viewport height of drag sweeps one whole turn.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.theta_delta -= TAU * dx / viewport_height;
        self.phi_delta -= TAU * dy / viewport_height;
    }

    /// Queue a dolly; positive steps move toward the target.
    pub fn zoom(&mut self, steps: f32) {
        self.scale *= ZOOM_STEP.powf(steps);
    }

    pub fn pointer_pressed(&mut self, pressed: bool) {
        self.dragging = pressed;
        if !pressed {
            self.last_cursor = None;
        }
    }

    /// Track cursor motion, converting it into orbit deltas while dragging.
    pub fn pointer_moved(&mut self, x: f64, y: f64, viewport_height: f32) {
        if let (true, Some((last_x, last_y))) = (self.dragging, self.last_cursor) {
            let dx = (x - last_x) as f32;
            let dy = (y - last_y) as f32;
            self.rotate(dx, dy, viewport_height);
        }
        if self.dragging {
            self.last_cursor = Some((x, y));
        }
    }

    pub fn pointer_left(&mut self) {
        self.dragging = false;
        self.last_cursor = None;
    }

    /// Integrate one frame of damping and write the result into the
    /// camera. Returns whether the camera actually moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let moved = self.theta_delta.abs() > REST_THRESHOLD
            || self.phi_delta.abs() > REST_THRESHOLD
            || (self.scale - 1.0).abs() > REST_THRESHOLD;

        self.theta += self.theta_delta * self.damping_factor;
        self.phi += self.phi_delta * self.damping_factor;

        let min_phi = self.min_polar_angle.max(POLE_EPSILON);
        let max_phi = self.max_polar_angle.min(PI - POLE_EPSILON);
        self.phi = self.phi.clamp(min_phi, max_phi);

        self.radius = (self.radius * self.scale).clamp(self.min_distance, self.max_distance);

        let sin_phi = self.phi.sin();
        let offset = Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        );
        camera.position = self.target + offset;
        camera.look_at(self.target);

        self.theta_delta *= 1.0 - self.damping_factor;
        self.phi_delta *= 1.0 - self.damping_factor;
        self.scale = 1.0;

        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    fn demo_setup() -> (PerspectiveCamera, OrbitControls) {
        let mut camera = PerspectiveCamera::new(75.0, 16.0 / 9.0, 0.1, 1000.0);
        camera.position = Vec3::new(10.0, 2.0, 10.0);
        camera.look_at(Vec3::ZERO);

        let mut controls = OrbitControls::from_camera(&camera);
        controls.min_distance = 3.0;
        controls.max_distance = 100.0;
        controls.min_polar_angle = FRAC_PI_4;
        controls.max_polar_angle = 3.0 * FRAC_PI_4;
        (camera, controls)
    }

    #[test]
    fn from_camera_recovers_spherical_state() {
        let (_, controls) = demo_setup();

        let expected_radius = (10.0f32 * 10.0 + 2.0 * 2.0 + 10.0 * 10.0).sqrt();
        assert!((controls.radius() - expected_radius).abs() < 1e-4);
        assert!((controls.theta() - FRAC_PI_4).abs() < 1e-5);
        assert!((controls.phi() - (2.0 / expected_radius).acos()).abs() < 1e-5);
    }

    #[test]
    fn idle_update_reports_no_motion_and_keeps_position() {
        let (mut camera, mut controls) = demo_setup();
        let before = camera.position;

        let moved = controls.update(&mut camera);

        assert!(!moved);
        assert!((camera.position - before).length() < 1e-4);
    }

    #[test]
    fn damping_applies_the_full_drag_eventually() {
        let (mut camera, mut controls) = demo_setup();
        let start_theta = controls.theta();

        // One full-viewport horizontal drag = one full turn queued
        controls.rotate(180.0, 0.0, 720.0);
        let queued = -TAU * 180.0 / 720.0;

        for _ in 0..600 {
            controls.update(&mut camera);
        }

        assert!(
            (controls.theta() - (start_theta + queued)).abs() < 1e-3,
            "Damped integration should converge on the queued rotation"
        );
    }

    #[test]
    fn motion_coasts_across_frames() {
        let (mut camera, mut controls) = demo_setup();

        controls.rotate(100.0, 0.0, 720.0);
        assert!(controls.update(&mut camera), "First frame absorbs some delta");
        assert!(controls.update(&mut camera), "Residual delta keeps it moving");

        for _ in 0..800 {
            controls.update(&mut camera);
        }
        assert!(!controls.update(&mut camera), "Eventually it settles");
    }

    #[test]
    fn polar_angle_clamps_to_limits() {
        let (mut camera, mut controls) = demo_setup();

        // Huge downward drag tries to push phi past the upper limit
        controls.rotate(0.0, -10000.0, 720.0);
        for _ in 0..600 {
            controls.update(&mut camera);
        }
        assert!(controls.phi() >= FRAC_PI_4 - 1e-5);

        controls.rotate(0.0, 20000.0, 720.0);
        for _ in 0..600 {
            controls.update(&mut camera);
        }
        assert!(controls.phi() <= 3.0 * FRAC_PI_4 + 1e-5);
    }

    #[test]
    fn zoom_clamps_to_distance_limits() {
        let (mut camera, mut controls) = demo_setup();

        for _ in 0..200 {
            controls.zoom(5.0);
            controls.update(&mut camera);
        }
        assert!((controls.radius() - 3.0).abs() < 1e-4, "Dolly-in stops at min");

        for _ in 0..200 {
            controls.zoom(-5.0);
            controls.update(&mut camera);
        }
        assert!((controls.radius() - 100.0).abs() < 1e-4, "Dolly-out stops at max");
    }

    #[test]
    fn camera_keeps_facing_the_target() {
        let (mut camera, mut controls) = demo_setup();

        controls.rotate(50.0, 30.0, 720.0);
        controls.zoom(2.0);
        for _ in 0..10 {
            controls.update(&mut camera);
        }

        assert_eq!(camera.target, controls.target);
        let distance = (camera.position - controls.target).length();
        assert!((distance - controls.radius()).abs() < 1e-4);
    }

    #[test]
    fn drag_requires_pressed_pointer() {
        let (mut camera, mut controls) = demo_setup();
        let start_theta = controls.theta();

        // Moves with the button up do nothing
        controls.pointer_moved(10.0, 10.0, 720.0);
        controls.pointer_moved(60.0, 10.0, 720.0);
        controls.update(&mut camera);
        assert!((controls.theta() - start_theta).abs() < 1e-6);

        // Press, move, and the orbit follows
        controls.pointer_pressed(true);
        controls.pointer_moved(60.0, 10.0, 720.0);
        controls.pointer_moved(120.0, 10.0, 720.0);
        for _ in 0..600 {
            controls.update(&mut camera);
        }
        assert!((controls.theta() - start_theta).abs() > 1e-3);
    }

    #[test]
    fn pointer_leave_cancels_the_drag() {
        let (mut camera, mut controls) = demo_setup();

        controls.pointer_pressed(true);
        controls.pointer_moved(10.0, 10.0, 720.0);
        controls.pointer_left();

        let start_theta = controls.theta();
        controls.pointer_moved(500.0, 10.0, 720.0);
        controls.update(&mut camera);

        assert!((controls.theta() - start_theta).abs() < 1e-6);
    }
}
