use clap::Parser;
use glam::Vec3;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scene_viewer::cli::Cli;
use scene_viewer::{
    build_demo_scene, AnimatedMeshes, Animation, AnimationParams, Clock, FrameStats,
    OrbitControls, PerspectiveCamera, Scene, SceneRenderer, ViewerConfig,
};

// === Constants ===

const CAMERA_FOV_DEGREES: f32 = 75.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;
const CAMERA_START: Vec3 = Vec3::new(10.0, 2.0, 10.0);
const MIN_ORBIT_DISTANCE: f32 = 3.0;
const MAX_ORBIT_DISTANCE: f32 = 100.0;
const MIN_POLAR_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
const MAX_POLAR_ANGLE: f32 = 3.0 * std::f32::consts::FRAC_PI_4;

// === Type Aliases ===

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    scene: Scene,
    meshes: AnimatedMeshes,
    camera: PerspectiveCamera,
    controls: OrbitControls,
    animation: Animation,
    params: AnimationParams,
    clock: Clock,
    stats: FrameStats,
}

impl App {
    fn new(cli: Cli) -> Self {
        let config = ViewerConfig::load_or_default(cli.config.as_deref());
        let (scene, meshes) = build_demo_scene();

        let mut camera = PerspectiveCamera::new(
            CAMERA_FOV_DEGREES,
            cli.width as f32 / cli.height as f32,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        camera.position = CAMERA_START;
        camera.look_at(Vec3::ZERO);

        let mut controls = OrbitControls::from_camera(&camera);
        controls.min_distance = MIN_ORBIT_DISTANCE;
        controls.max_distance = MAX_ORBIT_DISTANCE;
        controls.min_polar_angle = MIN_POLAR_ANGLE;
        controls.max_polar_angle = MAX_POLAR_ANGLE;

        Self {
            cli,
            window: None,
            renderer: None,
            scene,
            meshes,
            camera,
            controls,
            animation: Animation::new(),
            params: config.animation,
            clock: Clock::new(),
            stats: FrameStats::new(),
        }
    }

    fn viewport_height(&self) -> f32 {
        self.window
            .as_ref()
            .map_or(0.0, |window| window.inner_size().height as f32)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Scene Viewer")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(SceneRenderer::new(
                window.clone(),
                &self.scene,
                &self.camera,
                !self.cli.no_hud,
            )) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.camera.set_aspect(size.width, size.height);

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let the HUD handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return; // the overlay consumed it
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                self.camera.set_aspect(new_size.width, new_size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.controls.pointer_pressed(state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let height = self.viewport_height();
                self.controls.pointer_moved(position.x, position.y, height);
            }
            WindowEvent::CursorLeft { .. } => self.controls.pointer_left(),
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / 100.0,
                };
                self.controls.zoom(steps);
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                self.stats.record(delta);

                self.animation
                    .advance(&mut self.scene, &self.meshes, &self.params);
                self.controls.update(&mut self.camera);

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.render(
                        &self.scene,
                        &self.camera,
                        window,
                        &self.stats,
                        &mut self.params,
                    ) {
                        Ok(()) => {}
                        // Stale swapchain: reconfigure at the current size
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = window.inner_size();
                            renderer.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            eprintln!("Render error: out of GPU memory");
                            event_loop.exit();
                        }
                        Err(e) => eprintln!("Render error: {}", e),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    println!("Scene Viewer - Controls: drag to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
