//! Scene description: objects, lights, and scene files.

use std::fs;
use std::path::Path;

use glam::Vec3;
use glint_math::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Material, Primitive};

/// Errors that can occur while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene file parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object {index} ({kind}): {reason}")]
    InvalidShape {
        index: usize,
        kind: &'static str,
        reason: String,
    },

    #[error("Object {index} material: {reason}")]
    InvalidMaterial { index: usize, reason: String },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// A shape paired with its material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub shape: Primitive,
    #[serde(default)]
    pub material: Material,
}

impl Object {
    pub fn new(shape: Primitive, material: Material) -> Self {
        Self { shape, material }
    }
}

/// A point light. There is no distance falloff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// The complete set of objects and lights.
///
/// Objects are scanned in order; when two objects are hit at the same
/// distance the earlier one wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub objects: Vec<Object>,
    #[serde(default)]
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create a scene and validate it.
    pub fn new(objects: Vec<Object>, lights: Vec<Light>) -> SceneResult<Self> {
        let mut scene = Self { objects, lights };
        scene.validate()?;
        Ok(scene)
    }

    /// Parse and validate a scene from JSON text.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let mut scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load and validate a scene from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let scene = Self::from_json_str(&text)?;
        log::info!(
            "Loaded scene {}: {} objects, {} lights",
            path.display(),
            scene.object_count(),
            scene.light_count()
        );
        Ok(scene)
    }

    /// Serialize the scene as pretty JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every object and normalize stored plane normals.
    pub fn validate(&mut self) -> SceneResult<()> {
        for (index, object) in self.objects.iter_mut().enumerate() {
            let kind = object.shape.kind();
            object
                .shape
                .prepare()
                .map_err(|reason| SceneError::InvalidShape { index, kind, reason })?;
            object
                .material
                .check()
                .map_err(|reason| SceneError::InvalidMaterial { index, reason })?;
        }

        if self.lights.is_empty() {
            log::warn!("Scene has no lights; only mirror and refraction paths will show");
        }

        Ok(())
    }

    /// Get the number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
