//! Runtime scene: entities, point lights and options.
//!
//! Built up with `add_entity` / `add_point_light`, then treated as read-only
//! while rendering. No locking is done; the scene is shared by reference
//! across render threads.

use std::sync::Arc;

use whitted_core::{SceneDescription, SceneOptions, SceneResult};
use whitted_math::Ray;

use crate::entity::{Entity, EntityId};
use crate::hittable::{Intersector, SceneHit};
use crate::{Material, PointLight};

/// A complete renderable scene.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: Vec<Arc<Entity>>,
    lights: Vec<Arc<PointLight>>,
    options: SceneOptions,
}

impl Scene {
    /// Create an empty scene with the given options.
    pub fn new(options: SceneOptions) -> Self {
        Self {
            entities: Vec::new(),
            lights: Vec::new(),
            options,
        }
    }

    /// Build a scene from a validated description.
    pub fn from_description(description: &SceneDescription) -> SceneResult<Self> {
        let mut scene = Self::new(description.options);

        for entity in &description.entities {
            let material = Material::from(*description.material(&entity.material)?);
            scene.add_entity(Arc::new(Entity::from_description(&entity.shape, material)));
        }
        for light in &description.lights {
            scene.add_point_light(Arc::new(PointLight::from(*light)));
        }

        log::debug!(
            "Built scene with {} entities and {} lights",
            scene.entity_count(),
            scene.light_count()
        );

        Ok(scene)
    }

    /// Add an entity and return its id.
    ///
    /// Adding the same `Arc` twice has no further effect and returns the id
    /// it was first given.
    pub fn add_entity(&mut self, entity: Arc<Entity>) -> EntityId {
        if let Some(index) = self.entities.iter().position(|e| Arc::ptr_eq(e, &entity)) {
            return EntityId(index);
        }
        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }

    /// Add a point light. Returns false if this exact light was already present.
    pub fn add_point_light(&mut self, light: Arc<PointLight>) -> bool {
        if self.lights.iter().any(|l| Arc::ptr_eq(l, &light)) {
            return false;
        }
        self.lights.push(light);
        true
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0).map(|e| e.as_ref())
    }

    pub fn entities(&self) -> &[Arc<Entity>] {
        &self.entities
    }

    pub fn lights(&self) -> &[Arc<PointLight>] {
        &self.lights
    }

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

impl Intersector for Scene {
    /// Linear scan over every entity. On exactly equal distances the entity
    /// added first wins.
    fn nearest_hit(&self, ray: &Ray) -> Option<SceneHit<'_>> {
        self.entities
            .iter()
            .enumerate()
            .filter_map(|(index, entity)| {
                entity.intersect(ray).map(|hit| SceneHit {
                    entity: EntityId(index),
                    distance_sq: (hit.position - ray.origin).length_squared(),
                    hit,
                })
            })
            .fold(None, |nearest: Option<SceneHit<'_>>, candidate| match nearest {
                Some(best) if best.distance_sq <= candidate.distance_sq => Some(best),
                _ => Some(candidate),
            })
    }

    fn occluded(&self, ray: &Ray, exclude: EntityId, max_distance_sq: f64) -> bool {
        self.entities
            .iter()
            .enumerate()
            .filter(|(index, _)| EntityId(*index) != exclude)
            .filter_map(|(_, entity)| entity.intersect(ray))
            .any(|hit| (hit.position - ray.origin).length_squared() < max_distance_sq)
    }
}
