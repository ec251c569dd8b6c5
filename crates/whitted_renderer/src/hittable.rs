//! Hit records and the intersection seam used by the shading engine.

use whitted_math::{Ray, Vec3};

use crate::entity::EntityId;
use crate::Material;

/// Below this |d . n| a ray counts as parallel to a plane or triangle.
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// Record of a ray-surface intersection.
///
/// Only produced on success; a miss is `None`, never a sentinel position.
#[derive(Debug, Clone, Copy)]
pub struct RayHit<'a> {
    /// Point of intersection, on the ray at some t > 0
    pub position: Vec3,
    /// Unit surface normal as stored by the primitive (not flipped to face the ray)
    pub normal: Vec3,
    /// Direction of the ray that produced the hit
    pub incident: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> RayHit<'a> {
    pub fn new(position: Vec3, normal: Vec3, incident: Vec3, material: &'a Material) -> Self {
        Self {
            position,
            normal,
            incident,
            material,
        }
    }

    /// True when the ray arrived from the side the normal points toward.
    #[inline]
    pub fn outside(&self) -> bool {
        self.incident.dot(self.normal) < 0.0
    }

    /// Normal oriented against the incident ray.
    #[inline]
    pub fn facing_normal(&self) -> Vec3 {
        if self.outside() {
            self.normal
        } else {
            -self.normal
        }
    }
}

/// The nearest hit along a ray together with the entity that produced it.
#[derive(Debug, Clone, Copy)]
pub struct SceneHit<'a> {
    pub entity: EntityId,
    pub hit: RayHit<'a>,
    /// Squared distance from the ray origin to the hit position
    pub distance_sq: f64,
}

/// Ray queries against a set of entities.
///
/// `Scene` answers these with a linear scan. A spatial index can implement
/// the same trait and be handed to the tracer without changing the hit types.
pub trait Intersector: Send + Sync {
    /// Closest hit along the ray, by squared distance from its origin.
    fn nearest_hit(&self, ray: &Ray) -> Option<SceneHit<'_>>;

    /// True if any entity other than `exclude` is hit closer to the ray
    /// origin than `max_distance_sq`.
    fn occluded(&self, ray: &Ray, exclude: EntityId, max_distance_sq: f64) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_math::Color;

    #[test]
    fn test_outside_and_facing_normal() {
        let material = Material::diffuse(Color::WHITE);

        let front = RayHit::new(Vec3::ZERO, Vec3::Y, -Vec3::Y, &material);
        assert!(front.outside());
        assert_eq!(front.facing_normal(), Vec3::Y);

        let back = RayHit::new(Vec3::ZERO, Vec3::Y, Vec3::Y, &material);
        assert!(!back.outside());
        assert_eq!(back.facing_normal(), -Vec3::Y);
    }
}
