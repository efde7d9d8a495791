//! Glint Core - Scene description for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Object`, `Light`, `Material`
//! - **Primitives**: spheres, planes, checkerboards, indented spheres, tori
//! - **Scene files**: JSON loading with validation, plus a built-in demo scene
//!
//! The scene is built once before rendering and only read afterwards.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::Scene;
//!
//! let scene = Scene::load_json("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.object_count(),
//!     scene.light_count());
//! ```

pub mod demo;
pub mod material;
pub mod scene;
pub mod shape;

// Re-export commonly used types
pub use material::Material;
pub use scene::{Light, Object, Scene, SceneError, SceneResult};
pub use shape::{Checkerboard, IndentSphere, Plane, Primitive, Sphere, Torus};
