//! Pinhole camera for ray generation.

use glint_math::{Ray, Vec3};

/// A fixed pinhole camera.
///
/// There is no camera-to-world matrix: each pixel's ray direction is the
/// forward vector plus an offset in x and y proportional to the pixel's
/// distance from the image center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Ray origin for every pixel
    pub position: Vec3,
    /// Direction of the center pixel (not normalized)
    pub forward: Vec3,
    /// Spread of the image plane; larger is a wider view
    pub fov_scale: f32,
}

impl Camera {
    /// Create a new camera.
    pub fn new(position: Vec3, forward: Vec3, fov_scale: f32) -> Self {
        Self {
            position,
            forward,
            fov_scale,
        }
    }

    /// Generate the ray through image position (x, y).
    ///
    /// Coordinates are in pixels from the top-left corner and may be
    /// fractional for sub-pixel samples. Offsets are divided by the image
    /// height for both axes, so pixels stay square.
    pub fn ray_for(&self, x: f32, y: f32, width: u32, height: u32) -> Ray {
        let half_width = (width / 2) as f32;
        let half_height = (height / 2) as f32;
        let h = height as f32;

        let offset = Vec3::new(
            (half_width - x) / h * self.fov_scale,
            (half_height - y) / h * self.fov_scale,
            0.0,
        );

        Ray::new(self.position, self.forward + offset)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z, 1.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_is_forward() {
        let camera = Camera::default();
        let ray = camera.ray_for(400.0, 300.0, 800, 600);

        assert_eq!(ray.origin, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::Z);
    }

    #[test]
    fn test_ray_offsets() {
        let camera = Camera::default();

        // Top-left pixel looks up and toward +x
        let ray = camera.ray_for(0.0, 0.0, 800, 600);
        assert!((ray.direction.x - 400.0 / 600.0 * 1.5).abs() < 1e-6);
        assert!((ray.direction.y - 300.0 / 600.0 * 1.5).abs() < 1e-6);
        assert_eq!(ray.direction.z, 1.0);

        // Bottom-right pixel looks the other way
        let ray = camera.ray_for(799.0, 599.0, 800, 600);
        assert!(ray.direction.x < 0.0);
        assert!(ray.direction.y < 0.0);
    }

    #[test]
    fn test_odd_width_uses_integer_center() {
        let camera = Camera::default();
        let ray = camera.ray_for(2.0, 2.0, 5, 5);
        assert_eq!(ray.direction, Vec3::Z);
    }

    #[test]
    fn test_offset_position() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Z, 1.0);
        assert_eq!(camera.ray_for(0.0, 0.0, 10, 10).origin, Vec3::new(1.0, 2.0, 3.0));
    }
}
