//! Effective material lookup, including the checkerboard pattern.

use glint_core::{Checkerboard, Material, Object, Primitive};
use glint_math::Vec3;

/// The material that applies at `point` on `object`.
///
/// Checkerboards alternate between the object's own material and their
/// `alternate` material; every other shape has a single material.
pub fn material_at(object: &Object, point: Vec3) -> &Material {
    match &object.shape {
        Primitive::Checkerboard(board) => {
            let (u, v) = tile_indices(board, point);
            if (u ^ v) & 1 == 1 {
                &object.material
            } else {
                &board.alternate
            }
        }
        _ => &object.material,
    }
}

/// Integer tile coordinates of a point on a checkerboard plane.
pub fn tile_indices(board: &Checkerboard, point: Vec3) -> (i64, i64) {
    let (u, v) = plane_basis(board.plane.normal);
    let local = point - board.plane.point;

    let ui = (u.dot(local) / board.scale).ceil() as i64;
    let vi = (v.dot(local) / board.scale).ceil() as i64;
    (ui, vi)
}

/// Two orthonormal vectors spanning the plane with the given normal.
fn plane_basis(normal: Vec3) -> (Vec3, Vec3) {
    // Any reference axis works as long as it is not parallel to the normal
    let reference = if normal.dot(Vec3::X).abs() > 0.9 {
        Vec3::Y
    } else {
        Vec3::X
    };

    let u = normal.cross(reference).normalize_or_zero();
    let v = normal.cross(u).normalize_or_zero();
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Plane, Sphere};
    use glint_math::Color;

    fn floor(scale: f32) -> Object {
        Object::new(
            Primitive::Checkerboard(Checkerboard {
                plane: Plane::new(Vec3::ZERO, Vec3::Y),
                alternate: Material::new(Color::new(0.3, 0.3, 0.3)),
                scale,
            }),
            Material::new(Color::ONE),
        )
    }

    #[test]
    fn test_one_tile_apart_differs() {
        let board = floor(2.0);
        let p = Vec3::new(0.5, 0.0, 0.5);

        let here = material_at(&board, p).color;
        let across_x = material_at(&board, p + Vec3::new(2.0, 0.0, 0.0)).color;
        let across_z = material_at(&board, p + Vec3::new(0.0, 0.0, 2.0)).color;

        assert_ne!(here, across_x);
        assert_ne!(here, across_z);
    }

    #[test]
    fn test_two_tiles_apart_matches() {
        let board = floor(2.0);
        let p = Vec3::new(0.5, 0.0, 0.5);

        let here = material_at(&board, p).color;
        assert_eq!(here, material_at(&board, p + Vec3::new(4.0, 0.0, 0.0)).color);
        assert_eq!(here, material_at(&board, p + Vec3::new(0.0, 0.0, -4.0)).color);
        // Diagonal neighbour flips both indices
        assert_eq!(here, material_at(&board, p + Vec3::new(2.0, 0.0, 2.0)).color);
    }

    #[test]
    fn test_negative_coordinates_alternate() {
        let board = floor(1.0);
        let a = material_at(&board, Vec3::new(-0.5, 0.0, 0.5)).color;
        let b = material_at(&board, Vec3::new(-1.5, 0.0, 0.5)).color;
        let c = material_at(&board, Vec3::new(-2.5, 0.0, 0.5)).color;

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        for normal in [Vec3::Y, Vec3::X, Vec3::new(-0.5, 1.0, -1.0).normalize()] {
            let (u, v) = plane_basis(normal);
            assert!((u.length() - 1.0).abs() < 1e-5);
            assert!((v.length() - 1.0).abs() < 1e-5);
            assert!(u.dot(v).abs() < 1e-5);
            assert!(u.dot(normal).abs() < 1e-5);
            assert!(v.dot(normal).abs() < 1e-5);
        }
    }

    #[test]
    fn test_plain_objects_use_their_material() {
        let object = Object::new(
            Primitive::Sphere(Sphere::new(Vec3::ZERO, 1.0)),
            Material::new(Color::new(1.0, 0.0, 0.0)),
        );
        assert_eq!(material_at(&object, Vec3::X).color, Color::new(1.0, 0.0, 0.0));
    }
}
