//! Shadow test for direct lighting.

use whitted_math::Ray;

use crate::hittable::{Intersector, SceneHit};
use crate::PointLight;

/// True if something other than the shaded entity blocks `light`.
///
/// The shadow ray starts exactly at the hit position. Self-shadowing is
/// avoided by excluding the originating entity, not by offsetting the origin.
pub fn in_shadow(world: &dyn Intersector, shading: &SceneHit<'_>, light: &PointLight) -> bool {
    let position = shading.hit.position;
    let to_light = light.position - position;
    let distance_sq = to_light.length_squared();
    if distance_sq == 0.0 {
        return false;
    }

    let ray = Ray::new(position, to_light / distance_sq.sqrt());
    world.occluded(&ray, shading.entity, distance_sq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Entity, Material, Scene, Sphere};
    use std::sync::Arc;
    use whitted_math::{Color, Vec3};

    fn sphere(center: Vec3, radius: f64) -> Arc<Entity> {
        Arc::new(Sphere::new(center, radius, Material::diffuse(Color::WHITE)).into())
    }

    fn front_hit(scene: &Scene) -> SceneHit<'_> {
        scene
            .nearest_hit(&Ray::new(Vec3::ZERO, Vec3::Z))
            .expect("camera ray should hit the sphere")
    }

    #[test]
    fn test_visible_light_not_shadowed() {
        let mut scene = Scene::default();
        scene.add_entity(sphere(Vec3::new(0.0, 0.0, 4.0), 1.0));
        let light = PointLight::new(Vec3::new(2.0, 2.0, 0.0), Color::WHITE);

        let hit = front_hit(&scene);
        assert!(!in_shadow(&scene, &hit, &light));
    }

    #[test]
    fn test_occluder_between_point_and_light() {
        let mut scene = Scene::default();
        scene.add_entity(sphere(Vec3::new(0.0, 0.0, 4.0), 1.0));
        let light = PointLight::new(Vec3::new(2.0, 2.0, 0.0), Color::WHITE);

        let hit = front_hit(&scene);
        let midpoint = (hit.hit.position + light.position) / 2.0;
        scene.add_entity(sphere(midpoint, 0.5));

        let hit = front_hit(&scene);
        assert!(in_shadow(&scene, &hit, &light));
    }

    #[test]
    fn test_geometry_beyond_light_does_not_shadow() {
        let mut scene = Scene::default();
        scene.add_entity(sphere(Vec3::new(0.0, 0.0, 4.0), 1.0));
        let light = PointLight::new(Vec3::new(2.0, 2.0, 0.0), Color::WHITE);

        // Directly behind the light as seen from the shading point
        let hit = front_hit(&scene);
        let beyond = light.position + (light.position - hit.hit.position).normalize() * 3.0;
        scene.add_entity(sphere(beyond, 0.5));

        let hit = front_hit(&scene);
        assert!(!in_shadow(&scene, &hit, &light));
    }

    #[test]
    fn test_light_behind_surface_is_not_self_shadowed() {
        // The far side of the sphere would hit itself, but the originating
        // entity is excluded.
        let mut scene = Scene::default();
        scene.add_entity(sphere(Vec3::new(0.0, 0.0, 4.0), 1.0));
        let light = PointLight::new(Vec3::new(0.0, 0.0, 10.0), Color::WHITE);

        let hit = front_hit(&scene);
        assert!(!in_shadow(&scene, &hit, &light));
    }
}
