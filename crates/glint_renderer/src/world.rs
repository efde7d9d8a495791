//! Whole-scene ray queries: nearest hit and shadow occlusion.
//!
//! The scene is a flat list scanned exhaustively, in order.

use glint_core::Scene;
use glint_math::{Interval, Ray, Vec3};

use crate::hittable::Hittable;
use crate::pattern::material_at;

/// The nearest intersection across the whole scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHit {
    /// Index of the object that was hit
    pub object: usize,
    /// Parameter t along the ray
    pub t: f32,
    /// Unit surface normal at the hit
    pub normal: Vec3,
}

/// Find the closest object hit by the ray.
///
/// Ties keep the earlier object in scene order.
pub fn nearest_hit(scene: &Scene, ray: &Ray) -> Option<SceneHit> {
    let mut closest: Option<SceneHit> = None;

    for (index, object) in scene.objects.iter().enumerate() {
        if let Some(hit) = object.shape.hit(ray) {
            if closest.map_or(true, |best| hit.t < best.t) {
                closest = Some(SceneHit {
                    object: index,
                    t: hit.t,
                    normal: hit.normal,
                });
            }
        }
    }

    closest
}

/// Whether anything opaque lies strictly between `point` and `light`.
///
/// Refractive objects never cast shadows.
pub fn occluded(scene: &Scene, point: Vec3, light: Vec3) -> bool {
    let to_light = light - point;
    let range = Interval::new(0.0, to_light.length_squared());
    let shadow_ray = Ray::leaving(point, to_light);

    scene.objects.iter().any(|object| match object.shape.hit(&shadow_ray) {
        Some(hit) => {
            range.surrounds(hit.t * hit.t)
                && !material_at(object, shadow_ray.at(hit.t)).refractive
        }
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Material, Object, Plane, Primitive, Sphere};
    use glint_math::Color;

    fn sphere(center: Vec3, radius: f32, material: Material) -> Object {
        Object::new(Primitive::Sphere(Sphere::new(center, radius)), material)
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        let scene = Scene {
            objects: vec![
                sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, Material::default()),
                sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::default()),
            ],
            lights: vec![],
        };

        let hit = nearest_hit(&scene, &Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert_eq!(hit.object, 1);
        assert!((hit.t - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_nearest_hit_tie_keeps_first() {
        let red = Material::new(Color::new(1.0, 0.0, 0.0));
        let blue = Material::new(Color::new(0.0, 0.0, 1.0));
        let scene = Scene {
            objects: vec![
                sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, red),
                sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, blue),
            ],
            lights: vec![],
        };

        let hit = nearest_hit(&scene, &Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert_eq!(hit.object, 0);
    }

    #[test]
    fn test_nearest_hit_none_in_empty_direction() {
        let scene = Scene {
            objects: vec![sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::default())],
            lights: vec![],
        };
        assert!(nearest_hit(&scene, &Ray::new(Vec3::ZERO, -Vec3::Z)).is_none());
    }

    #[test]
    fn test_opaque_blocker_casts_shadow() {
        let scene = Scene {
            objects: vec![sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::default())],
            lights: vec![],
        };
        assert!(occluded(&scene, Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_refractive_blocker_casts_no_shadow() {
        let scene = Scene {
            objects: vec![sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::glass(1.0 / 1.5))],
            lights: vec![],
        };
        assert!(!occluded(&scene, Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_blocker_beyond_light_casts_no_shadow() {
        let scene = Scene {
            objects: vec![sphere(Vec3::new(0.0, 0.0, 20.0), 1.0, Material::default())],
            lights: vec![],
        };
        assert!(!occluded(&scene, Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_surface_does_not_shadow_itself() {
        let floor = Object::new(
            Primitive::Plane(Plane::new(Vec3::ZERO, Vec3::Y)),
            Material::default(),
        );
        let scene = Scene {
            objects: vec![floor],
            lights: vec![],
        };
        assert!(!occluded(&scene, Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.0, 5.0, 0.0)));
    }
}
