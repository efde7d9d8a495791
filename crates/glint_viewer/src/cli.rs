use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::RenderConfig;
use log::LevelFilter;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "glint_viewer")]
#[command(about = "Render a Glint scene progressively and save it as a PNG")]
pub struct Args {
    /// Scene description in JSON; the built-in demo scene is used if omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Sub-samples per axis (each pixel averages an n x n grid)
    #[arg(long, default_value_t = 1)]
    pub supersample: u32,

    /// Field-of-view scale of the pinhole camera
    #[arg(long, default_value_t = 1.5)]
    pub fov: f32,

    /// Pixels resolved per host-loop tick
    #[arg(long, default_value_t = 4096)]
    pub pixels_per_tick: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "glint.png")]
    pub output: PathBuf,

    /// Logging level (RUST_LOG still applies per module)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Render settings described by these arguments.
    pub fn render_config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig::default()
            .with_resolution(self.width, self.height)
            .with_supersample(self.supersample)
            .with_camera(defaults.camera_position, defaults.camera_forward, self.fov)
            .with_pixels_per_tick(self.pixels_per_tick)
    }
}
