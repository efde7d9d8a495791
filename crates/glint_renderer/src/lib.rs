//! Glint Renderer - progressive Whitted-style ray tracing on the CPU.
//!
//! Traces one camera ray per pixel (or an n×n grid of them) through a flat
//! list of analytic shapes, with Phong shading, hard shadows, mirror
//! reflection and refraction. The `Scheduler` renders one pixel per call so a
//! single-threaded host loop stays responsive while the frame fills in.

mod camera;
mod framebuffer;
mod hittable;
mod optics;
mod pattern;
mod renderer;
mod scheduler;
mod shading;
mod tracer;
mod world;

pub use camera::Camera;
pub use framebuffer::{FrameBuffer, FrameBufferError, FrameBufferResult, BYTES_PER_PIXEL};
pub use hittable::{Hit, Hittable, DISCRIMINANT_EPSILON, TORUS_SEGMENTS};
pub use optics::{fresnel_transmittance, orient_interface, reflect, refract, Refraction};
pub use pattern::{material_at, tile_indices};
pub use renderer::{render, render_pixel, RenderConfig};
pub use scheduler::{RenderCursor, Scheduler};
pub use shading::shade;
pub use tracer::{Tracer, BACKGROUND, DEPTH_EXHAUSTED_COLOR, MAX_DEPTH};
pub use world::{nearest_hit, occluded, SceneHit};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Color, Interval, Ray, Vec3};
