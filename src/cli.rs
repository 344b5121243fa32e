// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-viewer")]
#[command(about = "WebGPU Scene Viewer", long_about = None)]
pub struct Cli {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Path to a JSON file with animation parameters
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Disable the stats and animation overlay
    #[arg(long = "no-hud", default_value = "false")]
    pub no_hud: bool,
}
