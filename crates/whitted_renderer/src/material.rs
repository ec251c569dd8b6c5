//! Surface materials and the optics helpers they rely on.

use whitted_core::MaterialDescription;
use whitted_math::{Color, Vec3};

/// How a surface interacts with light.
///
/// The shading engine dispatches on the variant: diffuse surfaces are lit
/// by point lights (and optionally ambient light), reflective surfaces spawn
/// a mirror ray, refractive surfaces split light by Fresnel reflectance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Diffuse { color: Color },
    Reflective { color: Color },
    Refractive { color: Color, refractive_index: f64 },
}

impl Material {
    /// Create a diffuse (Lambertian) material.
    pub fn diffuse(color: Color) -> Self {
        Material::Diffuse { color }
    }

    /// Create a perfect mirror.
    pub fn reflective(color: Color) -> Self {
        Material::Reflective { color }
    }

    /// Create a dielectric.
    ///
    /// - `refractive_index`: 1.0 = vacuum, 1.5 = glass, 2.4 = diamond
    pub fn refractive(color: Color, refractive_index: f64) -> Self {
        Material::Refractive {
            color,
            refractive_index,
        }
    }

    /// Base color of the material.
    pub fn color(&self) -> Color {
        match *self {
            Material::Diffuse { color }
            | Material::Reflective { color }
            | Material::Refractive { color, .. } => color,
        }
    }
}

impl From<MaterialDescription> for Material {
    fn from(description: MaterialDescription) -> Self {
        match description {
            MaterialDescription::Diffuse { color } => Material::Diffuse { color },
            MaterialDescription::Reflective { color } => Material::Reflective { color },
            MaterialDescription::Refractive {
                color,
                refractive_index,
            } => Material::Refractive {
                color,
                refractive_index,
            },
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Mirror direction of `incident` about `normal`, normalized.
///
/// R = I - 2 (N . I) N
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    (incident - 2.0 * normal.dot(incident) * normal).normalize()
}

/// Snell's-law setup for a ray crossing a boundary with the given index.
///
/// The ray enters from vacuum when it arrives against the normal, otherwise
/// the indices are swapped and the normal flipped.
#[derive(Debug, Clone, Copy)]
pub struct Interface {
    /// Cosine of the incidence angle, always non-negative
    pub cos_i: f64,
    /// Index on the incident side
    pub eta_i: f64,
    /// Index on the transmitted side
    pub eta_t: f64,
    /// Normal oriented against the incident ray
    pub normal: Vec3,
}

impl Interface {
    pub fn new(incident: Vec3, normal: Vec3, refractive_index: f64) -> Self {
        let cos = incident.dot(normal).clamp(-1.0, 1.0);
        if cos < 0.0 {
            Self {
                cos_i: -cos,
                eta_i: 1.0,
                eta_t: refractive_index,
                normal,
            }
        } else {
            Self {
                cos_i: cos,
                eta_i: refractive_index,
                eta_t: 1.0,
                normal: -normal,
            }
        }
    }

    /// Relative index eta_i / eta_t.
    #[inline]
    pub fn eta(&self) -> f64 {
        self.eta_i / self.eta_t
    }

    /// Sine of the transmission angle. At or above 1 the ray is totally
    /// internally reflected.
    pub fn sin_t(&self) -> f64 {
        self.eta() * (1.0 - self.cos_i * self.cos_i).max(0.0).sqrt()
    }

    /// Fraction of light reflected, the mean of the s- and p-polarised
    /// Fresnel terms. Returns 1 under total internal reflection.
    pub fn reflectance(&self) -> f64 {
        let sin_t = self.sin_t();
        if sin_t >= 1.0 {
            return 1.0;
        }

        let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();
        let (eta_i, eta_t, cos_i) = (self.eta_i, self.eta_t, self.cos_i);
        let rs = (eta_t * cos_i - eta_i * cos_t) / (eta_t * cos_i + eta_i * cos_t);
        let rp = (eta_i * cos_i - eta_t * cos_t) / (eta_i * cos_i + eta_t * cos_t);
        (rs * rs + rp * rp) / 2.0
    }

    /// Transmitted direction, or `None` under total internal reflection.
    pub fn refract(&self, incident: Vec3) -> Option<Vec3> {
        let eta = self.eta();
        let k = 1.0 - eta * eta * (1.0 - self.cos_i * self.cos_i);
        if k < 0.0 || self.sin_t() >= 1.0 {
            return None;
        }
        Some((eta * incident + (eta * self.cos_i - k.sqrt()) * self.normal).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_material_color() {
        let c = Color::new(0.2, 0.4, 0.6);
        assert_eq!(Material::diffuse(c).color(), c);
        assert_eq!(Material::reflective(c).color(), c);
        assert_eq!(Material::refractive(c, 1.5).color(), c);
    }

    #[test]
    fn test_from_description() {
        let m: Material = MaterialDescription::Refractive {
            color: Color::WHITE,
            refractive_index: 1.33,
        }
        .into();
        assert_eq!(m, Material::refractive(Color::WHITE, 1.33));
    }

    #[test]
    fn test_reflect_normal_incidence() {
        let incident = Vec3::new(0.0, 0.0, 1.0);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let r = reflect(incident, normal);
        assert!((r - (-incident)).length() < EPS);
    }

    #[test]
    fn test_reflect_45_degrees() {
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(incident, Vec3::Y);
        assert!((r - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < EPS);
    }

    #[test]
    fn test_matched_indices_pass_straight_through() {
        let incident = Vec3::new(0.0, 0.0, 1.0);
        let interface = Interface::new(incident, Vec3::new(0.0, 0.0, -1.0), 1.0);

        assert!((interface.eta() - 1.0).abs() < EPS);
        let t = interface.refract(incident).unwrap();
        assert!((t - incident).length() < EPS);
        assert!(interface.reflectance() < 1.0);
    }

    #[test]
    fn test_glass_normal_incidence_reflectance() {
        // ((n - 1) / (n + 1))^2 = 0.04 for n = 1.5
        let incident = Vec3::new(0.0, 0.0, 1.0);
        let interface = Interface::new(incident, Vec3::new(0.0, 0.0, -1.0), 1.5);
        assert!((interface.reflectance() - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_entering_bends_towards_normal() {
        let incident = Vec3::new(1.0, 0.0, 1.0).normalize();
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let interface = Interface::new(incident, normal, 1.5);
        let t = interface.refract(incident).unwrap();

        // Snell: sin(theta_t) = sin(theta_i) / 1.5
        let sin_t = t.cross(Vec3::Z).length();
        assert!((sin_t - (0.5f64.sqrt() / 1.5)).abs() < 1e-9);
    }

    #[test]
    fn test_exiting_flips_normal_and_swaps_indices() {
        let incident = Vec3::new(0.0, 0.0, 1.0);
        // Normal points the same way as the ray: we are inside the medium.
        let interface = Interface::new(incident, Vec3::Z, 1.5);
        assert_eq!(interface.eta_i, 1.5);
        assert_eq!(interface.eta_t, 1.0);
        assert_eq!(interface.normal, -Vec3::Z);
    }

    #[test]
    fn test_total_internal_reflection() {
        // Leaving glass at a grazing angle
        let incident = Vec3::new(1.0, 0.0, 0.2).normalize();
        let interface = Interface::new(incident, Vec3::Z, 1.5);
        assert!(interface.sin_t() >= 1.0);
        assert_eq!(interface.reflectance(), 1.0);
        assert!(interface.refract(incident).is_none());
    }
}
