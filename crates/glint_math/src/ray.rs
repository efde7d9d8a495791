use crate::{Vec3, SURFACE_EPSILON};

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not required to be normalized. Intersection routines
/// report hits as the parameter `t` along this direction, so a hit point is
/// always `origin + t * direction` regardless of its length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray leaving a surface point.
    ///
    /// The direction is normalized and the origin is pushed `SURFACE_EPSILON`
    /// along it, so the new ray does not report the surface it starts on.
    pub fn leaving(point: Vec3, direction: Vec3) -> Self {
        let direction = direction.normalize_or_zero();
        Self {
            origin: point + direction * SURFACE_EPSILON,
            direction,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
