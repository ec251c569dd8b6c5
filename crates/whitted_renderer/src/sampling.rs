//! Random sampling helpers for ambient (indirect) lighting.

use rand::{Rng, RngCore};
use std::f64::consts::PI;
use whitted_math::Vec3;

/// Generate a uniform f64 in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Orthonormal frame {tangent, normal, bitangent} around a surface normal.
#[derive(Debug, Clone, Copy)]
pub struct Basis {
    pub tangent: Vec3,
    pub normal: Vec3,
    pub bitangent: Vec3,
}

impl Basis {
    /// Build a frame around a unit normal.
    ///
    /// The tangent is taken in whichever of the XZ or YZ planes keeps the
    /// cross product away from zero.
    pub fn from_normal(normal: Vec3) -> Self {
        let tangent = if normal.x.abs() > normal.y.abs() {
            Vec3::new(normal.z, 0.0, -normal.x) / (normal.x * normal.x + normal.z * normal.z).sqrt()
        } else {
            Vec3::new(0.0, -normal.z, normal.y) / (normal.y * normal.y + normal.z * normal.z).sqrt()
        }
        .normalize();
        let bitangent = normal.cross(tangent).normalize();

        Self {
            tangent,
            normal,
            bitangent,
        }
    }

    /// Map a local direction (x, y = along normal, z) into world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        local.x * self.bitangent + local.y * self.normal + local.z * self.tangent
    }
}

/// Direction on the unit hemisphere around +y.
///
/// `r1` is the cosine to the pole, `r2` picks the azimuth. Both are uniform
/// in [0, 1).
pub fn sample_hemisphere(r1: f64, r2: f64) -> Vec3 {
    let sin_theta = (1.0 - r1 * r1).max(0.0).sqrt();
    let phi = 2.0 * PI * r2;
    Vec3::new(sin_theta * phi.cos(), r1, sin_theta * phi.sin())
}

/// Probability density of each hemisphere sample.
pub const HEMISPHERE_PDF: f64 = 1.0 / (2.0 * PI);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    fn assert_orthonormal(basis: &Basis) {
        assert!((basis.tangent.length() - 1.0).abs() < EPS);
        assert!((basis.bitangent.length() - 1.0).abs() < EPS);
        assert!(basis.tangent.dot(basis.normal).abs() < EPS);
        assert!(basis.bitangent.dot(basis.normal).abs() < EPS);
        assert!(basis.tangent.dot(basis.bitangent).abs() < EPS);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let normals = [
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
            -Vec3::X,
            Vec3::new(1.0, 1.0, 1.0).normalize(),
            Vec3::new(-0.3, 0.9, 0.1).normalize(),
        ];
        for n in normals {
            assert_orthonormal(&Basis::from_normal(n));
        }
    }

    #[test]
    fn test_pole_maps_to_normal() {
        let n = Vec3::new(0.2, -0.5, 0.8).normalize();
        let basis = Basis::from_normal(n);
        assert!((basis.to_world(Vec3::Y) - n).length() < EPS);
    }

    #[test]
    fn test_samples_stay_in_hemisphere() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = Vec3::new(0.0, 0.0, -1.0);
        let basis = Basis::from_normal(n);

        for _ in 0..256 {
            let local = sample_hemisphere(gen_f64(&mut rng), gen_f64(&mut rng));
            assert!((local.length() - 1.0).abs() < EPS);

            let world = basis.to_world(local);
            assert!((world.length() - 1.0).abs() < EPS);
            assert!(world.dot(n) >= 0.0);
        }
    }

    #[test]
    fn test_seeded_samples_are_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(gen_f64(&mut a), gen_f64(&mut b));
        }
    }
}
