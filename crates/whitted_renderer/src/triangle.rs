//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane, then keeps the hit only if it lies on
//! the inner side of all three edges.

use crate::{
    hittable::{RayHit, PARALLEL_EPSILON},
    Material,
};
use whitted_math::{Ray, Vec3};

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices, wound v0 -> v1 -> v2
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    /// Material
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The vertices must not be collinear; the scene loader rejects such
    /// triangles before they get here.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let denom = ray.direction.dot(self.normal);

        // Ray is parallel to triangle
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.v0 - ray.origin).dot(self.normal) / denom;
        if t <= 0.0 {
            return None;
        }

        let position = ray.at(t);

        let edges = [
            (self.v0, self.v1),
            (self.v1, self.v2),
            (self.v2, self.v0),
        ];
        for (from, to) in edges {
            let c = (to - from).cross(position - from);
            if self.normal.dot(c) < 0.0 {
                return None;
            }
        }

        Some(RayHit::new(position, self.normal, ray.direction, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_math::Color;

    fn test_triangle() -> Triangle {
        // Triangle in XY plane at z=5, normal toward -z
        Triangle::new(
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
            Material::diffuse(Color::splat(0.5)),
        )
    }

    #[test]
    fn test_normal_from_winding() {
        let tri = test_triangle();
        assert!((tri.normal() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_triangle_hit() {
        let tri = test_triangle();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = tri.intersect(&ray).unwrap();
        assert!((hit.position - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-9);
        assert_eq!(hit.normal, tri.normal());
    }

    #[test]
    fn test_triangle_miss() {
        let tri = test_triangle();

        // Ray pointing away
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_centroid_along_normal_hits() {
        let tri = test_triangle();
        let origin = tri.centroid() - tri.normal() * 3.0;
        let ray = Ray::new(origin, tri.normal());

        let hit = tri.intersect(&ray).unwrap();
        assert!((hit.position - tri.centroid()).length() < 1e-9);
    }

    #[test]
    fn test_outside_bounds_misses() {
        let tri = test_triangle();
        let origin = tri.centroid() + Vec3::new(5.0, 5.0, 0.0) - tri.normal() * 3.0;
        let ray = Ray::new(origin, tri.normal());
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_each_edge_rejects() {
        let tri = test_triangle();
        let outside_points = [
            Vec3::new(0.0, -1.5, 0.0),  // below v2 -> v0 edge
            Vec3::new(-0.9, 0.5, 0.0),  // left of v0 -> v1 edge
            Vec3::new(0.9, 0.5, 0.0),   // right of v1 -> v2 edge
        ];
        for p in outside_points {
            let ray = Ray::new(p, Vec3::Z);
            assert!(tri.intersect(&ray).is_none(), "{p:?} should miss");
        }
    }

    #[test]
    fn test_parallel_ray_misses() {
        let tri = test_triangle();
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 5.0), Vec3::X);
        assert!(tri.intersect(&ray).is_none());
    }
}
