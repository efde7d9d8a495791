//! Ray-shape intersection and point containment.
//!
//! All shape dispatch happens here through the `Hittable` impl for
//! `Primitive`; the rest of the renderer never matches on shape variants.

use glint_core::{Checkerboard, IndentSphere, Plane, Primitive, Sphere, Torus};
use glint_math::{Interval, Ray, Vec3};

/// Discriminants closer to zero than this are treated as a tangent hit.
pub const DISCRIMINANT_EPSILON: f32 = 4e-4;

/// Number of ring spheres used to approximate a torus.
pub const TORUS_SEGMENTS: usize = 360;

/// A ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Unit surface normal. Points out of the solid, except on the cavity
    /// wall of an indented sphere where it faces into the cavity.
    pub normal: Vec3,
}

/// Trait for shapes that can be hit by rays.
pub trait Hittable {
    /// Nearest intersection in front of the ray origin, if any.
    fn hit(&self, ray: &Ray) -> Option<Hit>;

    /// Whether a point lies strictly inside the solid.
    fn contains(&self, point: Vec3) -> bool;
}

/// Roots of `a t² + b t + c = 0`, smaller first. A tangent hit returns the
/// same root twice.
fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    if a <= 0.0 {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    if discriminant.abs() < DISCRIMINANT_EPSILON {
        let root = -b / (2.0 * a);
        return Some((root, root));
    }

    let sqrtd = discriminant.sqrt();
    let near = (-b - sqrtd) / (2.0 * a);
    let far = (-b + sqrtd) / (2.0 * a);
    Some((near, far))
}

fn sphere_roots(sphere: &Sphere, ray: &Ray) -> Option<(f32, f32)> {
    let oc = ray.origin - sphere.center;
    let a = ray.direction.length_squared();
    let b = 2.0 * ray.direction.dot(oc);
    let c = oc.length_squared() - sphere.radius * sphere.radius;
    solve_quadratic(a, b, c)
}

fn sphere_normal(sphere: &Sphere, point: Vec3) -> Vec3 {
    (point - sphere.center).normalize_or_zero()
}

/// The larger non-negative root, i.e. where the ray leaves the sphere.
fn sphere_far_hit(sphere: &Sphere, ray: &Ray) -> Option<Hit> {
    let (_, far) = sphere_roots(sphere, ray)?;
    if far < 0.0 {
        return None;
    }
    Some(Hit {
        t: far,
        normal: sphere_normal(sphere, ray.at(far)),
    })
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let (near, far) = sphere_roots(self, ray)?;

        // Find the nearest root in front of the origin
        let t = if near >= 0.0 {
            near
        } else if far >= 0.0 {
            far
        } else {
            return None;
        };

        Some(Hit {
            t,
            normal: sphere_normal(self, ray.at(t)),
        })
    }

    fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() < self.radius * self.radius
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < f32::EPSILON {
            return None;
        }

        let plane_offset = self.normal.dot(self.point);
        let t = (plane_offset - self.normal.dot(ray.origin)) / denom;
        if !Interval::FORWARD.surrounds(t) {
            return None;
        }

        Some(Hit {
            t,
            normal: self.normal,
        })
    }

    /// The half-space behind the normal counts as inside.
    fn contains(&self, point: Vec3) -> bool {
        (point - self.point).dot(self.normal) < 0.0
    }
}

impl Hittable for Checkerboard {
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        self.plane.hit(ray)
    }

    fn contains(&self, point: Vec3) -> bool {
        self.plane.contains(point)
    }
}

impl Hittable for IndentSphere {
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let outer = self.real.hit(ray)?;
        if !self.anti.contains(ray.at(outer.t)) {
            return Some(outer);
        }

        // The outer surface is carved away here; the cavity wall is where the
        // ray leaves the anti sphere, provided that point is still solid.
        let wall = sphere_far_hit(&self.anti, ray)?;
        if !self.real.contains(ray.at(wall.t)) {
            return None;
        }

        Some(Hit {
            t: wall.t,
            normal: -wall.normal,
        })
    }

    fn contains(&self, point: Vec3) -> bool {
        self.real.contains(point) && !self.anti.contains(point)
    }
}

fn ring_sphere(torus: &Torus, segment: usize) -> Sphere {
    let angle = (segment as f32).to_radians();
    let ring = torus.ring_radius();
    let offset = Vec3::new(angle.cos() * ring, angle.sin() * ring, 0.0);
    Sphere::new(torus.center + offset, torus.tube_radius())
}

impl Hittable for Torus {
    /// Approximated by a ring of spheres, one per degree.
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let bounds = Sphere::new(self.center, self.outer_radius);
        bounds.hit(ray)?;

        let mut closest: Option<Hit> = None;
        for segment in 0..TORUS_SEGMENTS {
            if let Some(hit) = ring_sphere(self, segment).hit(ray) {
                if closest.map_or(true, |best| hit.t < best.t) {
                    closest = Some(hit);
                }
            }
        }
        closest
    }

    fn contains(&self, point: Vec3) -> bool {
        let local = point - self.center;
        let radial = (local.x * local.x + local.y * local.y).sqrt() - self.ring_radius();
        let tube = self.tube_radius();
        radial * radial + local.z * local.z < tube * tube
    }
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray),
            Primitive::Plane(plane) => plane.hit(ray),
            Primitive::Checkerboard(board) => board.hit(ray),
            Primitive::IndentSphere(indent) => indent.hit(ray),
            Primitive::Torus(torus) => torus.hit(ray),
        }
    }

    fn contains(&self, point: Vec3) -> bool {
        match self {
            Primitive::Sphere(sphere) => sphere.contains(point),
            Primitive::Plane(plane) => plane.contains(point),
            Primitive::Checkerboard(board) => board.contains(point),
            Primitive::IndentSphere(indent) => indent.contains(point),
            Primitive::Torus(torus) => torus.contains(point),
        }
    }
}
