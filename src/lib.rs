pub mod animation;
pub mod camera;
pub mod cli;
pub mod color;
pub mod config;
pub mod controls;
pub mod core;
pub mod demo;
pub mod hud;
pub mod renderer;
pub mod scene;
pub mod types;

// Re-export the types the binary and integration tests use directly
pub use animation::{AnimatedMeshes, Animation, AnimationParams};
pub use camera::PerspectiveCamera;
pub use color::Color;
pub use config::ViewerConfig;
pub use controls::OrbitControls;
pub use core::{Clock, FrameStats};
pub use demo::build_demo_scene;
pub use renderer::SceneRenderer;
pub use scene::{MeshHandle, Scene};
