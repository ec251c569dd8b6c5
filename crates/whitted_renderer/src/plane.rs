//! Infinite plane primitive.

use crate::{
    hittable::{RayHit, PARALLEL_EPSILON},
    Material,
};
use whitted_math::{Ray, Vec3};

/// An infinite plane through `center` facing `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    center: Vec3,
    /// Unit normal
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a plane. The normal is normalized here.
    pub fn new(center: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            center,
            normal: normal.normalize(),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// t = (center - origin) . N / (direction . N)
    ///
    /// The returned normal is the plane's own; it is not flipped toward the ray.
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.center - ray.origin).dot(self.normal) / denom;
        if t <= 0.0 {
            return None;
        }

        Some(RayHit::new(
            ray.at(t),
            self.normal,
            ray.direction,
            &self.material,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_math::Color;

    fn floor() -> Plane {
        Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Material::diffuse(Color::WHITE),
        )
    }

    #[test]
    fn test_normal_is_normalized() {
        assert_eq!(floor().normal(), Vec3::Y);
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 1.0).normalize());
        let plane = floor();
        let hit = plane.intersect(&ray).unwrap();

        assert!((hit.position - Vec3::new(0.0, -1.0, 1.0)).length() < 1e-9);
        assert_eq!(hit.normal, Vec3::Y);
        assert!(hit.outside());
    }

    #[test]
    fn test_hit_from_below_keeps_normal() {
        let ray = Ray::new(Vec3::new(0.0, -3.0, 0.0), Vec3::Y);
        let plane = floor();
        let hit = plane.intersect(&ray).unwrap();

        assert_eq!(hit.normal, Vec3::Y);
        assert!(!hit.outside());
    }

    #[test]
    fn test_parallel_rays_miss() {
        let plane = floor();
        let directions = [Vec3::X, Vec3::Z, Vec3::new(1.0, 0.0, 1.0).normalize()];
        for dir in directions {
            assert!(plane.intersect(&Ray::new(Vec3::ZERO, dir)).is_none());
            // Also when the ray lies in the plane itself
            assert!(plane
                .intersect(&Ray::new(Vec3::new(0.0, -1.0, 0.0), dir))
                .is_none());
        }
    }

    #[test]
    fn test_plane_behind_origin() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(floor().intersect(&ray).is_none());
    }
}
