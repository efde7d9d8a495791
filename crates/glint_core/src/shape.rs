//! Analytic primitive shapes.
//!
//! These are plain descriptions. Intersection and containment live in the
//! renderer, which dispatches over `Primitive` in one place.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::Material;

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    /// Create a plane. The normal is normalized; a zero normal stays zero and
    /// is rejected by scene validation.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
        }
    }
}

/// A plane tiled with two alternating materials.
///
/// The object's own material is used for one set of tiles and `alternate`
/// for the other. Tiles are `scale` units wide along both in-plane axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkerboard {
    pub plane: Plane,
    pub alternate: Material,
    pub scale: f32,
}

/// A sphere with a spherical cavity carved out of it (`real` minus `anti`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndentSphere {
    pub real: Sphere,
    pub anti: Sphere,
}

/// A torus lying in the XY plane around `center`.
///
/// The tube spans radially from `inner_radius` to `outer_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    pub center: Vec3,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl Torus {
    /// Radius of the circle running through the middle of the tube.
    pub fn ring_radius(&self) -> f32 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Radius of the tube cross-section.
    pub fn tube_radius(&self) -> f32 {
        (self.outer_radius - self.inner_radius) / 2.0
    }
}

/// One shape variant per scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Checkerboard(Checkerboard),
    IndentSphere(IndentSphere),
    Torus(Torus),
}

impl Primitive {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Plane(_) => "plane",
            Primitive::Checkerboard(_) => "checkerboard",
            Primitive::IndentSphere(_) => "indent_sphere",
            Primitive::Torus(_) => "torus",
        }
    }

    /// Normalize stored normals and check the geometry, returning a
    /// description of the first problem.
    pub fn prepare(&mut self) -> Result<(), String> {
        match self {
            Primitive::Sphere(sphere) => check_radius("radius", sphere.radius),
            Primitive::Plane(plane) => prepare_plane(plane),
            Primitive::Checkerboard(board) => {
                prepare_plane(&mut board.plane)?;
                if board.scale <= 0.0 {
                    return Err(format!("tile scale {} must be positive", board.scale));
                }
                board.alternate.check()
            }
            Primitive::IndentSphere(indent) => {
                check_radius("real radius", indent.real.radius)?;
                check_radius("anti radius", indent.anti.radius)?;
                let gap = (indent.real.center - indent.anti.center).length();
                if gap >= indent.real.radius + indent.anti.radius {
                    log::warn!("Indent sphere cavity does not touch its sphere");
                }
                Ok(())
            }
            Primitive::Torus(torus) => {
                check_radius("inner radius", torus.inner_radius)?;
                if torus.outer_radius <= torus.inner_radius {
                    return Err(format!(
                        "outer radius {} must exceed inner radius {}",
                        torus.outer_radius, torus.inner_radius
                    ));
                }
                Ok(())
            }
        }
    }
}

fn check_radius(what: &str, radius: f32) -> Result<(), String> {
    if radius > 0.0 {
        Ok(())
    } else {
        Err(format!("{} {} must be positive", what, radius))
    }
}

fn prepare_plane(plane: &mut Plane) -> Result<(), String> {
    match plane.normal.try_normalize() {
        Some(normal) => {
            plane.normal = normal;
            Ok(())
        }
        None => Err("plane normal has zero length".to_string()),
    }
}
