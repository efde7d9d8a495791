//! Render configuration and per-pixel sampling.

use glint_core::Scene;
use glint_math::{Color, Vec3};

use crate::{Camera, FrameBuffer, Scheduler, Tracer};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Sub-samples per axis; each pixel averages a supersample² grid
    pub supersample: u32,
    /// Camera position
    pub camera_position: Vec3,
    /// Direction of the center pixel
    pub camera_forward: Vec3,
    /// Field-of-view scale for the pinhole projection
    pub fov_scale: f32,
    /// Pixels a host loop should resolve per tick
    pub pixels_per_tick: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            supersample: 1,
            camera_position: Vec3::ZERO,
            camera_forward: Vec3::Z,
            fov_scale: 1.5,
            pixels_per_tick: 1,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the supersampling factor (clamped to at least 1).
    pub fn with_supersample(mut self, supersample: u32) -> Self {
        self.supersample = supersample.max(1);
        self
    }

    /// Set camera placement.
    pub fn with_camera(mut self, position: Vec3, forward: Vec3, fov_scale: f32) -> Self {
        self.camera_position = position;
        self.camera_forward = forward;
        self.fov_scale = fov_scale;
        self
    }

    /// Set how many pixels a host tick should resolve.
    pub fn with_pixels_per_tick(mut self, pixels: u32) -> Self {
        self.pixels_per_tick = pixels.max(1);
        self
    }

    /// The camera described by this configuration.
    pub fn camera(&self) -> Camera {
        Camera::new(self.camera_position, self.camera_forward, self.fov_scale)
    }
}

/// Render a single pixel, averaging an `n × n` grid of sub-samples.
///
/// Sub-samples sit at `x + i / n`, so with `n = 1` the pixel's ray goes
/// exactly through `(x, y)`.
pub fn render_pixel(
    tracer: &Tracer,
    camera: &Camera,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let n = config.supersample.max(1);
    let step = 1.0 / n as f32;

    let mut pixel_color = Color::ZERO;
    for j in 0..n {
        for i in 0..n {
            let sx = x as f32 + i as f32 * step;
            let sy = y as f32 + j as f32 * step;
            let ray = camera.ray_for(sx, sy, config.width, config.height);
            pixel_color += tracer.resolve_color(&ray, 0);
        }
    }

    // Average the samples
    pixel_color / (n * n) as f32
}

/// Render the entire scene to a new frame buffer, blocking until done.
pub fn render(scene: &Scene, config: &RenderConfig) -> FrameBuffer {
    let mut buffer = FrameBuffer::new(config.width, config.height);
    let mut scheduler = Scheduler::new(scene, config.clone());
    while scheduler.advance_one_step(&mut buffer) {}
    buffer
}
