//! Recursive color resolution: shading, mirror reflection and refraction.

use glint_core::{Material, Object, Scene};
use glint_math::{color, Color, Ray, Vec3};

use crate::hittable::Hittable;
use crate::optics::{fresnel_transmittance, orient_interface, reflect, refract};
use crate::pattern::material_at;
use crate::shading::shade;
use crate::world::{nearest_hit, SceneHit};

/// Deepest recursion level that is still traced. Rays spawned beyond it
/// resolve to `DEPTH_EXHAUSTED_COLOR`.
pub const MAX_DEPTH: u32 = 20;

/// Color returned when the bounce budget runs out.
pub const DEPTH_EXHAUSTED_COLOR: Color = color::WHITE;

/// Color of rays that hit nothing.
pub const BACKGROUND: Color = color::BLACK;

/// Resolves the color seen along a ray. Holds a read-only view of the scene.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Compute the color seen by a ray at the given recursion depth.
    ///
    /// Camera rays start at depth 0.
    pub fn resolve_color(&self, ray: &Ray, depth: u32) -> Color {
        if depth > MAX_DEPTH {
            return DEPTH_EXHAUSTED_COLOR;
        }

        let Some(hit) = nearest_hit(self.scene, ray) else {
            return BACKGROUND;
        };

        let object = &self.scene.objects[hit.object];
        let point = ray.at(hit.t);
        let material = material_at(object, point);
        let direction = ray.direction.normalize_or_zero();

        if material.refractive {
            return self.transmitted_color(ray, depth, object, material, point, hit.normal);
        }

        if material.mirror > 0.0 {
            let reflected = Ray::leaving(point, reflect(direction, hit.normal));
            let mirror_color = self.resolve_color(&reflected, depth + 1);
            let base = color::lerp(material.color, mirror_color, material.mirror);
            return self.shade_hit(&hit, point, ray, base);
        }

        self.shade_hit(&hit, point, ray, material.color)
    }

    fn shade_hit(&self, hit: &SceneHit, point: Vec3, ray: &Ray, base: Color) -> Color {
        shade(self.scene, hit.object, point, hit.normal, ray, base)
    }

    /// Blend of the reflected and refracted rays at a transparent surface,
    /// weighted by the Fresnel transmittance. Direct lighting is not added.
    fn transmitted_color(
        &self,
        ray: &Ray,
        depth: u32,
        object: &Object,
        material: &Material,
        point: Vec3,
        normal: Vec3,
    ) -> Color {
        let direction = ray.direction.normalize_or_zero();
        let inside = object.shape.contains(ray.origin);
        let (normal, eta) = orient_interface(normal, inside, material.refraction_ratio);

        let reflected = Ray::leaving(point, reflect(direction, normal));

        let Some(refraction) = refract(direction, normal, eta) else {
            // Total internal reflection
            return self.resolve_color(&reflected, depth + 1);
        };

        let transmitted = Ray::leaving(point, refraction.direction);
        let transmitted_color = self.resolve_color(&transmitted, depth + 1);
        let reflected_color = self.resolve_color(&reflected, depth + 1);

        let transmittance =
            fresnel_transmittance(eta, refraction.cos_incident, refraction.cos_transmitted);
        color::lerp(reflected_color, transmitted_color, transmittance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{IndentSphere, Light, Plane, Primitive, Sphere};

    fn sphere(center: Vec3, radius: f32, material: Material) -> Object {
        Object::new(Primitive::Sphere(Sphere::new(center, radius)), material)
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = Scene::default();
        let tracer = Tracer::new(&scene);
        assert_eq!(tracer.resolve_color(&Ray::new(Vec3::ZERO, Vec3::Z), 0), BACKGROUND);
    }

    #[test]
    fn test_depth_limit_returns_fallback() {
        let scene = Scene::default();
        let tracer = Tracer::new(&scene);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert_eq!(tracer.resolve_color(&ray, MAX_DEPTH), BACKGROUND);
        assert_eq!(tracer.resolve_color(&ray, MAX_DEPTH + 1), DEPTH_EXHAUSTED_COLOR);
    }

    #[test]
    fn test_closed_mirror_cavity_terminates() {
        // Camera inside a perfect mirror; the ray bounces along the z axis
        // until the depth budget runs out. Both lights sit outside the sphere
        // and reach each bounce point through its outward normal, so the
        // fallback white survives every level unchanged. With the lights
        // inside, the same cavity shades to black (see below).
        let mirror = Material::matte(Color::ONE).with_mirror(1.0);
        let scene = Scene {
            objects: vec![sphere(Vec3::ZERO, 10.0, mirror)],
            lights: vec![
                Light::new(Vec3::new(0.0, 0.0, 20.0), Color::ONE),
                Light::new(Vec3::new(0.0, 0.0, -20.0), Color::ONE),
            ],
        };
        let tracer = Tracer::new(&scene);

        let c = tracer.resolve_color(&Ray::new(Vec3::ZERO, Vec3::Z), 0);
        assert!((c - DEPTH_EXHAUSTED_COLOR).length() < 1e-4, "c={:?}", c);
    }

    #[test]
    fn test_closed_mirror_cavity_terminates_with_inner_light() {
        // Wall normals point outward, away from a light inside the cavity, so
        // it contributes nothing at any level. Resolution still returns.
        let mirror = Material::matte(Color::ONE).with_mirror(1.0);
        let scene = Scene {
            objects: vec![sphere(Vec3::ZERO, 10.0, mirror)],
            lights: vec![Light::new(Vec3::ZERO, Color::ONE)],
        };
        let tracer = Tracer::new(&scene);

        let c = tracer.resolve_color(&Ray::new(Vec3::ZERO, Vec3::Z), 0);
        assert_eq!(c, BACKGROUND);

        // One bounce short of the limit the reflected ray already gets the
        // fallback, which the unlit wall then shades to black
        let last = tracer.resolve_color(&Ray::new(Vec3::ZERO, Vec3::Z), MAX_DEPTH);
        assert_eq!(last, Color::ZERO);
    }

    #[test]
    fn test_partial_mirror_blends_reflection() {
        // Floor mirror reflecting a lit red wall behind the camera
        let floor = Object::new(
            Primitive::Plane(Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y)),
            Material::matte(Color::ONE).with_mirror(0.5),
        );
        let wall = Object::new(
            Primitive::Plane(Plane::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z)),
            Material::matte(Color::new(1.0, 0.0, 0.0)),
        );
        let scene = Scene {
            objects: vec![floor, wall],
            lights: vec![Light::new(Vec3::new(0.0, 5.0, 2.0), Color::ONE)],
        };
        let tracer = Tracer::new(&scene);

        let c = tracer.resolve_color(&Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 1.0)), 0);
        // Red from the reflection, green only from the white half of the floor
        assert!(c.x > c.y, "c={:?}", c);
        assert!(c.y > 0.0);
    }

    #[test]
    fn test_glass_sphere_shows_what_is_behind_it() {
        let glass = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::glass(1.0 / 1.5));
        let backdrop = Object::new(
            Primitive::Plane(Plane::new(Vec3::new(0.0, 0.0, 20.0), -Vec3::Z)),
            Material::matte(Color::new(0.0, 1.0, 0.0)),
        );
        let scene = Scene {
            objects: vec![glass, backdrop],
            lights: vec![Light::new(Vec3::ZERO, Color::ONE)],
        };
        let tracer = Tracer::new(&scene);

        // Straight through the center: mostly transmitted green
        let c = tracer.resolve_color(&Ray::new(Vec3::ZERO, Vec3::Z), 0);
        assert!(c.y > 0.8, "c={:?}", c);
        assert!(c.x < 0.1);
    }

    #[test]
    fn test_glass_ignores_mirror_weight() {
        // A refractive surface is weighted by Fresnel transmittance alone
        let glass = sphere(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Material::glass(1.0 / 1.5).with_mirror(1.0),
        );
        let backdrop = Object::new(
            Primitive::Plane(Plane::new(Vec3::new(0.0, 0.0, 20.0), -Vec3::Z)),
            Material::matte(Color::new(0.0, 1.0, 0.0)),
        );
        let scene = Scene {
            objects: vec![glass, backdrop],
            lights: vec![Light::new(Vec3::ZERO, Color::ONE)],
        };
        let tracer = Tracer::new(&scene);

        let c = tracer.resolve_color(&Ray::new(Vec3::ZERO, Vec3::Z), 0);
        assert!(c.y > 0.8, "c={:?}", c);
        assert!(c.x < 0.1 && c.z < 0.1);
    }

    #[test]
    fn test_total_internal_reflection_falls_back_to_reflection() {
        // Ray starts inside a glass sphere and meets the surface at a steep
        // angle, so nothing is transmitted and no NaN reaches the pixel.
        let glass = sphere(Vec3::ZERO, 1.0, Material::glass(1.0 / 1.5));
        let scene = Scene {
            objects: vec![glass],
            lights: vec![Light::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE)],
        };
        let tracer = Tracer::new(&scene);

        let ray = Ray::new(Vec3::new(0.0, 0.9, 0.0), Vec3::X);
        let c = tracer.resolve_color(&ray, 0);
        assert!(c.is_finite(), "c={:?}", c);
        assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
    }

    #[test]
    fn test_cavity_wall_is_lit_from_inside() {
        let indent = Object::new(
            Primitive::IndentSphere(IndentSphere {
                real: Sphere::new(Vec3::new(0.0, 0.0, 10.0), 2.0),
                anti: Sphere::new(Vec3::new(0.0, 0.0, 8.0), 1.0),
            }),
            Material::matte(Color::ONE),
        );
        let scene = Scene {
            objects: vec![indent],
            lights: vec![Light::new(Vec3::ZERO, Color::ONE)],
        };
        let tracer = Tracer::new(&scene);

        // Hits the back wall of the cavity at z=9, whose normal faces the light
        let c = tracer.resolve_color(&Ray::new(Vec3::ZERO, Vec3::Z), 0);
        assert!((c - Color::ONE).length() < 1e-4, "c={:?}", c);
    }
}
