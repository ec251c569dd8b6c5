//! Scene entities: a closed set of shapes, each carrying its material.

use whitted_core::ShapeDescription;
use whitted_math::Ray;

use crate::{hittable::RayHit, Material, Plane, Sphere, Triangle};

/// Index of an entity within its scene, assigned on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

/// Something that can be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Entity {
    /// Build an entity from its description and resolved material.
    pub fn from_description(shape: &ShapeDescription, material: Material) -> Self {
        match *shape {
            ShapeDescription::Plane { center, normal } => {
                Entity::Plane(Plane::new(center, normal, material))
            }
            ShapeDescription::Sphere { center, radius } => {
                Entity::Sphere(Sphere::new(center, radius, material))
            }
            ShapeDescription::Triangle { v0, v1, v2 } => {
                Entity::Triangle(Triangle::new(v0, v1, v2, material))
            }
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Entity::Plane(p) => p.material(),
            Entity::Sphere(s) => s.material(),
            Entity::Triangle(t) => t.material(),
        }
    }

    /// See [`intersect`].
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        intersect(self, ray)
    }
}

impl From<Plane> for Entity {
    fn from(plane: Plane) -> Self {
        Entity::Plane(plane)
    }
}

impl From<Sphere> for Entity {
    fn from(sphere: Sphere) -> Self {
        Entity::Sphere(sphere)
    }
}

impl From<Triangle> for Entity {
    fn from(triangle: Triangle) -> Self {
        Entity::Triangle(triangle)
    }
}

/// Intersect a ray with any entity.
///
/// Parallel rays, negative discriminants, hits behind the origin and points
/// outside a triangle all come back as `None`.
pub fn intersect<'a>(entity: &'a Entity, ray: &Ray) -> Option<RayHit<'a>> {
    match entity {
        Entity::Plane(plane) => plane.intersect(ray),
        Entity::Sphere(sphere) => sphere.intersect(ray),
        Entity::Triangle(triangle) => triangle.intersect(ray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_math::{Color, Vec3};

    #[test]
    fn test_from_description_dispatch() {
        let material = Material::reflective(Color::WHITE);
        let entity = Entity::from_description(
            &ShapeDescription::Sphere {
                center: Vec3::new(0.0, 0.0, 3.0),
                radius: 1.0,
            },
            material,
        );
        assert!(matches!(entity, Entity::Sphere(_)));
        assert_eq!(*entity.material(), material);

        let hit = entity.intersect(&Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert!((hit.position.z - 2.0).abs() < 1e-9);
        assert_eq!(*hit.material, material);
    }

    #[test]
    fn test_plane_description_normal_normalized() {
        let entity = Entity::from_description(
            &ShapeDescription::Plane {
                center: Vec3::ZERO,
                normal: Vec3::new(0.0, 0.0, -5.0),
            },
            Material::diffuse(Color::WHITE),
        );
        match entity {
            Entity::Plane(plane) => assert_eq!(plane.normal(), -Vec3::Z),
            other => panic!("expected plane, got {other:?}"),
        }
    }

    #[test]
    fn test_free_function_matches_method() {
        let entity: Entity = Triangle::new(
            Vec3::new(-1.0, -1.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(1.0, -1.0, 2.0),
            Material::diffuse(Color::WHITE),
        )
        .into();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let a = intersect(&entity, &ray).map(|h| h.position);
        let b = entity.intersect(&ray).map(|h| h.position);
        assert_eq!(a, b);
        assert!(a.is_some());
    }
}
