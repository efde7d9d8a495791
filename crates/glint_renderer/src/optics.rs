//! Reflection and refraction helpers.

use glint_math::{Interval, Vec3};

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Result of bending a ray through an interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refraction {
    /// Transmitted direction
    pub direction: Vec3,
    /// Cosine of the angle of incidence
    pub cos_incident: f32,
    /// Cosine of the angle of transmission
    pub cos_transmitted: f32,
}

/// Refract a unit direction through a surface with unit normal `n` facing
/// against it, using the vector form of Snell's law.
///
/// `eta` is the ratio of refractive indices (incident / transmitted).
/// Returns `None` on total internal reflection.
pub fn refract(d: Vec3, n: Vec3, eta: f32) -> Option<Refraction> {
    let cos_incident = (-d.dot(n)).clamp(-1.0, 1.0);
    let k = 1.0 - eta * eta * (1.0 - cos_incident * cos_incident);
    if k < 0.0 {
        return None;
    }

    let cos_transmitted = k.sqrt();
    Some(Refraction {
        direction: eta * d + (eta * cos_incident - cos_transmitted) * n,
        cos_incident,
        cos_transmitted,
    })
}

/// Fraction of light transmitted through an interface: one minus the mean
/// of the s- and p-polarized Fresnel reflectances.
pub fn fresnel_transmittance(eta: f32, cos_incident: f32, cos_transmitted: f32) -> f32 {
    let rs_den = eta * cos_incident + cos_transmitted;
    let rp_den = eta * cos_transmitted + cos_incident;
    if rs_den == 0.0 || rp_den == 0.0 {
        return 0.0;
    }

    let rs = ((eta * cos_incident - cos_transmitted) / rs_den).powi(2);
    let rp = ((eta * cos_transmitted - cos_incident) / rp_den).powi(2);
    Interval::UNIT.clamp(1.0 - (rs + rp) / 2.0)
}

/// Orient an interface for a ray: the normal to refract against and the
/// ratio of indices to use.
///
/// A ray starting inside the solid is leaving it, so the stored outward
/// normal is flipped and the entering ratio is inverted.
pub fn orient_interface(normal: Vec3, origin_inside: bool, refraction_ratio: f32) -> (Vec3, f32) {
    if origin_inside {
        (-normal, 1.0 / refraction_ratio)
    } else {
        (normal, refraction_ratio)
    }
}
