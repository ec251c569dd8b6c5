//! Sphere primitive for ray tracing.

use crate::{hittable::RayHit, Material};
use whitted_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Solve a t^2 + b t + c = 0 for the ray and keep the nearest root in front
    /// of the origin.
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        if a == 0.0 {
            return None;
        }

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Smaller root first, then the far side of the sphere
        let mut t = (-b - sqrtd) / (2.0 * a);
        if t <= 0.0 {
            t = (-b + sqrtd) / (2.0 * a);
            if t <= 0.0 {
                return None;
            }
        }

        let position = ray.at(t);
        let normal = (position - self.center).normalize();
        Some(RayHit::new(position, normal, ray.direction, &self.material))
    }
}
