//! Built-in demo scene, used when no scene file is given.

use glam::Vec3;
use glint_math::Color;

use crate::{Checkerboard, IndentSphere, Light, Material, Object, Plane, Primitive, Scene, Sphere};

impl Scene {
    /// Colored spheres over a tilted checkerboard, with one mirror sphere,
    /// one glass sphere and one indented sphere, lit by two lights.
    pub fn demo() -> Self {
        let mut objects = Vec::new();

        objects.push(Object::new(
            Primitive::Sphere(Sphere::new(Vec3::new(-9.0, 1.2, 25.0), 4.0)),
            Material::new(Color::new(0.3, 1.0, 0.3)),
        ));

        objects.push(Object::new(
            Primitive::Sphere(Sphere::new(Vec3::new(8.0, 1.5, 22.5), 3.0)),
            Material::new(Color::new(1.0, 0.3, 0.3)),
        ));

        // Mirror
        objects.push(Object::new(
            Primitive::Sphere(Sphere::new(Vec3::new(0.0, 3.0, 25.0), 6.0)),
            Material::new(Color::new(0.3, 0.3, 1.0))
                .with_mirror(0.8)
                .with_specular(1.0, 30.0)
                .with_metalness(1.0),
        ));

        objects.push(Object::new(
            Primitive::Checkerboard(Checkerboard {
                plane: Plane::new(Vec3::new(0.0, 3.0, 27.0), Vec3::new(-0.5, 1.0, -1.0)),
                alternate: Material::new(Color::new(0.3, 0.3, 0.3)).with_mirror(0.2),
                scale: 5.0,
            }),
            Material::new(Color::ONE).with_mirror(0.2),
        ));

        objects.push(Object::new(
            Primitive::Sphere(Sphere::new(Vec3::new(0.0, 16.0, 21.0), 4.0)),
            Material::new(Color::new(0.3, 0.3, 1.0)),
        ));

        // Glass
        objects.push(Object::new(
            Primitive::Sphere(Sphere::new(Vec3::new(-3.0, -2.5, 14.0), 2.0)),
            Material::glass(1.0 / 1.5).with_specular(1.0, 40.0),
        ));

        objects.push(Object::new(
            Primitive::IndentSphere(IndentSphere {
                real: Sphere::new(Vec3::new(5.0, -3.0, 16.0), 2.5),
                anti: Sphere::new(Vec3::new(4.0, -2.0, 14.0), 1.6),
            }),
            Material::new(Color::new(1.0, 0.8, 0.2)).with_specular(0.6, 12.0),
        ));

        let lights = vec![
            Light::new(Vec3::new(20.0, 15.0, 15.0), Color::new(0.5, 1.0, 1.0)),
            Light::new(Vec3::new(5.0, 0.0, 5.0), Color::new(0.7, 0.7, 0.5)),
        ];

        Self { objects, lights }
    }
}
