//! Progressive renderer that resolves one pixel per call.
//!
//! A single-threaded host loop calls `advance_one_step` (or `advance`) once
//! per tick and presents the buffer in between, so the frame fills in
//! without blocking input handling or redraws.

use std::time::Instant;

use glint_core::Scene;

use crate::renderer::render_pixel;
use crate::{Camera, FrameBuffer, RenderConfig, Tracer};

/// Position of the next pixel to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderCursor {
    pub x: u32,
    pub y: u32,
}

/// Renders a frame left-to-right, top-to-bottom, one pixel per step.
pub struct Scheduler<'a> {
    tracer: Tracer<'a>,
    camera: Camera,
    config: RenderConfig,
    cursor: RenderCursor,
    frame_started: Option<Instant>,
}

impl<'a> Scheduler<'a> {
    /// Create a scheduler positioned at the first pixel.
    pub fn new(scene: &'a Scene, config: RenderConfig) -> Self {
        if config.camera_forward.try_normalize().is_none() {
            log::warn!("Camera forward vector is zero; the center pixel will see background");
        }

        Self {
            tracer: Tracer::new(scene),
            camera: config.camera(),
            config,
            cursor: RenderCursor::default(),
            frame_started: None,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn cursor(&self) -> RenderCursor {
        self.cursor
    }

    /// Whether the cursor has passed the last row.
    pub fn is_complete(&self) -> bool {
        self.config.width == 0 || self.cursor.y >= self.config.height
    }

    /// Fraction of the frame already rendered, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let total = self.config.width as u64 * self.config.height as u64;
        if total == 0 || self.is_complete() {
            return 1.0;
        }
        let done = self.cursor.y as u64 * self.config.width as u64 + self.cursor.x as u64;
        done as f32 / total as f32
    }

    /// Resolve the pixel under the cursor and move the cursor on.
    ///
    /// Returns false without doing anything once the frame is complete, or
    /// when `buffer` does not have the configured dimensions.
    pub fn advance_one_step(&mut self, buffer: &mut FrameBuffer) -> bool {
        if self.is_complete() {
            return false;
        }

        if buffer.width() != self.config.width || buffer.height() != self.config.height {
            log::warn!(
                "Frame buffer is {}x{} but the render is {}x{}; skipping",
                buffer.width(),
                buffer.height(),
                self.config.width,
                self.config.height
            );
            return false;
        }

        if self.cursor == RenderCursor::default() {
            log::info!(
                "Rendering {}x{} frame ({}x{} samples per pixel)",
                self.config.width,
                self.config.height,
                self.config.supersample,
                self.config.supersample
            );
            self.frame_started = Some(Instant::now());
        }

        let RenderCursor { x, y } = self.cursor;
        let color = render_pixel(&self.tracer, &self.camera, x, y, &self.config);
        if !buffer.put_pixel(x, y, color) {
            return false;
        }

        self.cursor.x += 1;
        if self.cursor.x >= self.config.width {
            self.cursor.x = 0;
            self.cursor.y += 1;
            log::trace!("Row {} done", y);

            if self.is_complete() {
                let elapsed = self.frame_started.map(|start| start.elapsed());
                log::info!("Frame complete in {:?}", elapsed.unwrap_or_default());
            }
        }

        true
    }

    /// Run up to `steps` steps; returns how many pixels were written.
    pub fn advance(&mut self, buffer: &mut FrameBuffer, steps: u32) -> u32 {
        let mut done = 0;
        while done < steps && self.advance_one_step(buffer) {
            done += 1;
        }
        done
    }

    /// Move the cursor back to the first pixel to render a new frame.
    pub fn restart(&mut self) {
        self.cursor = RenderCursor::default();
        self.frame_started = None;
    }
}
