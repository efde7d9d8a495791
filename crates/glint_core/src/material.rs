//! Surface material description.

use glint_math::Color;
use serde::{Deserialize, Serialize};

/// How a surface reacts to light.
///
/// Values mirror the parameters of the Phong shading model plus the two
/// recursive effects (mirror reflection and refraction).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Base surface color (RGB, 0-1)
    pub color: Color,

    /// Mirror weight (0 = matte, 1 = perfect mirror)
    pub mirror: f32,

    /// Metalness (0-1). Carried with the material but not used by the
    /// Phong model, whose highlights are always light-colored.
    pub metalness: f32,

    /// Weight of the specular highlight
    pub specularness: f32,

    /// Weight of the diffuse term
    pub diffuseness: f32,

    /// Phong exponent, larger is a tighter highlight
    pub shininess: f32,

    /// Whether light passes through the surface
    pub refractive: bool,

    /// Ratio of refractive indices (incident / transmitted) when entering
    pub refraction_ratio: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::ONE,
            mirror: 0.0,
            metalness: 0.2,
            specularness: 0.4,
            diffuseness: 1.0,
            shininess: 4.0,
            refractive: false,
            refraction_ratio: 1.0,
        }
    }
}

impl Material {
    /// Create the default material with the given color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// A purely diffuse material: no highlight, no mirror.
    pub fn matte(color: Color) -> Self {
        Self {
            color,
            specularness: 0.0,
            metalness: 0.0,
            ..Default::default()
        }
    }

    /// A transparent material with the given entering ratio of indices.
    ///
    /// Glass seen from air is roughly `1.0 / 1.5`.
    pub fn glass(refraction_ratio: f32) -> Self {
        Self {
            refractive: true,
            refraction_ratio,
            metalness: 0.0,
            ..Default::default()
        }
    }

    /// Set the mirror weight.
    pub fn with_mirror(mut self, mirror: f32) -> Self {
        self.mirror = mirror;
        self
    }

    /// Set the highlight weight and exponent.
    pub fn with_specular(mut self, specularness: f32, shininess: f32) -> Self {
        self.specularness = specularness;
        self.shininess = shininess;
        self
    }

    /// Set the diffuse weight.
    pub fn with_diffuse(mut self, diffuseness: f32) -> Self {
        self.diffuseness = diffuseness;
        self
    }

    /// Set the metalness.
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    /// Check the value ranges, returning a description of the first problem.
    pub fn check(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.mirror) {
            return Err(format!("mirror {} outside [0, 1]", self.mirror));
        }
        if !(0.0..=1.0).contains(&self.metalness) {
            return Err(format!("metalness {} outside [0, 1]", self.metalness));
        }
        if self.specularness < 0.0 {
            return Err(format!("negative specularness {}", self.specularness));
        }
        if self.diffuseness < 0.0 {
            return Err(format!("negative diffuseness {}", self.diffuseness));
        }
        if self.shininess <= 0.0 {
            return Err(format!("shininess {} must be positive", self.shininess));
        }
        if self.refraction_ratio <= 0.0 {
            return Err(format!(
                "refraction ratio {} must be positive",
                self.refraction_ratio
            ));
        }
        Ok(())
    }
}
