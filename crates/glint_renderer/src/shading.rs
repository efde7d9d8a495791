//! Phong shading with hard shadows.

use glint_core::{Light, Material, Scene};
use glint_math::{color, Color, Ray, Vec3};

use crate::optics::reflect;
use crate::pattern::material_at;
use crate::world::occluded;

/// Direct lighting at a surface point from every unshadowed light.
///
/// `base` is the diffuse surface color to use, which for mirrors is already
/// blended with the reflected color. Per-light contributions are summed with
/// per-channel clamping.
pub fn shade(
    scene: &Scene,
    object_index: usize,
    point: Vec3,
    normal: Vec3,
    ray: &Ray,
    base: Color,
) -> Color {
    let material = material_at(&scene.objects[object_index], point);
    let view = ray.direction.normalize_or_zero();

    let mut result = color::BLACK;
    for light in &scene.lights {
        let contribution = light_contribution(material, base, light, point, normal, view);
        if contribution == color::BLACK {
            continue;
        }
        if occluded(scene, point, light.position) {
            continue;
        }
        result = color::add_clamped(result, contribution);
    }
    result
}

/// Diffuse plus Phong specular from one light, ignoring shadows.
///
/// The highlight takes the light's color, not the surface's.
fn light_contribution(
    material: &Material,
    base: Color,
    light: &Light,
    point: Vec3,
    normal: Vec3,
    view: Vec3,
) -> Color {
    let light_dir = (point - light.position).normalize_or_zero();

    let lambert = -light_dir.dot(normal);
    if lambert <= 0.0 {
        return color::BLACK;
    }
    let diffuse = lambert * light.color;

    let bounce = reflect(light_dir, normal);
    let alignment = bounce.dot(-view).max(0.0);
    let specular = alignment.powf(material.shininess) * light.color;

    material.diffuseness * diffuse * base + material.specularness * specular
}
