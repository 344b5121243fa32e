use glam::{Vec3, Vec4Swizzles};
use scene_viewer::{OrbitControls, PerspectiveCamera};
use std::f32::consts::FRAC_PI_4;

fn tutorial_camera() -> PerspectiveCamera {
    let mut camera = PerspectiveCamera::new(75.0, 16.0 / 9.0, 0.1, 1000.0);
    camera.position = Vec3::new(10.0, 2.0, 10.0);
    camera.look_at(Vec3::ZERO);
    camera
}

fn tutorial_controls(camera: &PerspectiveCamera) -> OrbitControls {
    let mut controls = OrbitControls::from_camera(camera);
    controls.min_distance = 3.0;
    controls.max_distance = 100.0;
    controls.min_polar_angle = FRAC_PI_4;
    controls.max_polar_angle = 3.0 * FRAC_PI_4;
    controls
}

/// Where the target lands in normalized device coordinates.
fn target_ndc(camera: &PerspectiveCamera) -> Vec3 {
    let clip = camera.view_projection() * camera.target.extend(1.0);
    clip.xyz() / clip.w
}

#[cfg(test)]
mod drag_session_tests {
    use super::*;

    #[test]
    fn test_full_viewport_drag_comes_back_around() {
        let mut camera = tutorial_camera();
        let mut controls = tutorial_controls(&camera);
        let start = camera.position;

        // A horizontal drag across one viewport height sweeps a whole turn
        controls.rotate(720.0, 0.0, 720.0);
        for _ in 0..800 {
            controls.update(&mut camera);
        }

        assert!(
            (camera.position - start).length() < 1e-2,
            "One full turn should land back at the start, off by {:?}",
            camera.position - start
        );
    }

    #[test]
    fn test_dragging_down_lifts_the_camera() {
        let mut camera = tutorial_camera();
        let mut controls = tutorial_controls(&camera);
        let start_height = camera.position.y;

        controls.pointer_pressed(true);
        controls.pointer_moved(100.0, 300.0, 720.0);
        controls.pointer_moved(100.0, 500.0, 720.0);
        controls.pointer_pressed(false);
        for _ in 0..400 {
            controls.update(&mut camera);
        }

        assert!(
            camera.position.y > start_height + 1.0,
            "Pulling the cursor down swings the camera up, y went {} -> {}",
            start_height,
            camera.position.y
        );
        assert!(
            controls.phi() >= FRAC_PI_4 - 1e-4,
            "The swing still respects the polar clamp"
        );
    }

    #[test]
    fn test_target_stays_centered_while_coasting() {
        let mut camera = tutorial_camera();
        let mut controls = tutorial_controls(&camera);

        controls.rotate(150.0, -60.0, 720.0);
        for frame in 0..120 {
            controls.update(&mut camera);
            let ndc = target_ndc(&camera);
            assert!(
                ndc.x.abs() < 1e-3 && ndc.y.abs() < 1e-3,
                "Target drifted to {:?} on frame {}",
                ndc,
                frame
            );
        }
    }
}

#[cfg(test)]
mod zoom_session_tests {
    use super::*;

    #[test]
    fn test_zoom_preserves_the_view_direction() {
        let mut camera = tutorial_camera();
        let mut controls = tutorial_controls(&camera);
        let direction_before = (camera.position - controls.target).normalize();

        for _ in 0..10 {
            controls.zoom(1.0);
            controls.update(&mut camera);
        }

        let direction_after = (camera.position - controls.target).normalize();
        assert!(
            (direction_after - direction_before).length() < 1e-4,
            "Dolly moves along the view ray, direction changed by {:?}",
            direction_after - direction_before
        );
    }

    #[test]
    fn test_zoom_steps_compound_multiplicatively() {
        let mut camera = tutorial_camera();
        let mut controls = tutorial_controls(&camera);
        let start_radius = controls.radius();

        for _ in 0..10 {
            controls.zoom(1.0);
            controls.update(&mut camera);
        }

        let expected = start_radius * 0.95f32.powi(10);
        assert!(
            (controls.radius() - expected).abs() < 1e-3,
            "Ten single steps should land at {}, got {}",
            expected,
            controls.radius()
        );
    }

    #[test]
    fn test_unclamped_controls_allow_any_distance() {
        let camera = tutorial_camera();
        let mut controls = OrbitControls::from_camera(&camera);

        let mut moving_camera = camera;
        for _ in 0..100 {
            controls.zoom(-5.0);
            controls.update(&mut moving_camera);
        }

        assert!(
            controls.radius() > 100.0,
            "Fresh controls carry no distance limit, got {}",
            controls.radius()
        );
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn test_a_whole_session_settles_inside_the_demo_limits() {
        let mut camera = tutorial_camera();
        let mut controls = tutorial_controls(&camera);

        // Orbit a bit, dolly in hard, wander off the window
        controls.pointer_pressed(true);
        controls.pointer_moved(200.0, 200.0, 720.0);
        controls.pointer_moved(420.0, 80.0, 720.0);
        controls.pointer_pressed(false);
        for _ in 0..50 {
            controls.zoom(5.0);
            controls.update(&mut camera);
        }
        controls.pointer_left();

        for _ in 0..800 {
            controls.update(&mut camera);
        }

        assert!(
            !controls.update(&mut camera),
            "All queued motion should have drained"
        );
        assert!(
            controls.radius() >= 3.0 - 1e-4 && controls.radius() <= 100.0 + 1e-4,
            "Radius {} escaped the distance clamps",
            controls.radius()
        );
        assert!(
            controls.phi() >= FRAC_PI_4 - 1e-4 && controls.phi() <= 3.0 * FRAC_PI_4 + 1e-4,
            "Polar angle {} escaped the clamps",
            controls.phi()
        );

        let distance = (camera.position - controls.target).length();
        assert!(
            (distance - controls.radius()).abs() < 1e-3,
            "Camera distance {} disagrees with the orbit radius {}",
            distance,
            controls.radius()
        );
    }

    #[test]
    fn test_resize_keeps_the_target_centered() {
        let mut camera = tutorial_camera();
        let mut controls = tutorial_controls(&camera);

        controls.rotate(90.0, 40.0, 720.0);
        for _ in 0..30 {
            controls.update(&mut camera);
        }

        camera.set_aspect(640, 960);
        let ndc = target_ndc(&camera);
        assert!(
            ndc.x.abs() < 1e-3 && ndc.y.abs() < 1e-3,
            "Aspect changes must not push the target off center, got {:?}",
            ndc
        );
    }
}
