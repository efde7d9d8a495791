// Re-export glam for convenience
pub use glam::*;

// Glint math types
pub mod color;
mod interval;
mod ray;

pub use color::Color;
pub use interval::Interval;
pub use ray::Ray;

/// Offset applied along a secondary ray's direction before tracing it, so the
/// ray does not immediately re-hit the surface it left.
pub const SURFACE_EPSILON: f32 = 4e-4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_zero_vector_normalize_is_guarded() {
        assert!(Vec3::ZERO.try_normalize().is_none());
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
    }
}
