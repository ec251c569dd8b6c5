//! Recursive light transport.
//!
//! `Tracer::shade` finds the nearest surface along a ray and resolves its
//! radiance by material: direct lighting with shadows for diffuse surfaces
//! (plus Monte Carlo ambient light when enabled), a mirror bounce for
//! reflective surfaces and a Fresnel-weighted reflection/transmission split
//! for refractive ones. Recursion stops hard at `max_depth`.

use std::f64::consts::PI;
use std::sync::Arc;

use rand::RngCore;
use whitted_math::{Color, Ray, Vec3};

use crate::hittable::{Intersector, SceneHit};
use crate::material::{reflect, Interface};
use crate::sampling::{gen_f64, sample_hemisphere, Basis, HEMISPHERE_PDF};
use crate::shadow::in_shadow;
use crate::{Material, PointLight, RenderConfig, Scene};

/// Distance secondary-ray origins are pushed off a surface along its normal.
pub const SURFACE_OFFSET: f64 = 1e-9;

/// The shading engine.
///
/// Holds only shared references, so one tracer can serve every render
/// thread; randomness comes in through `shade`'s `rng` argument.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    world: &'a dyn Intersector,
    lights: &'a [Arc<PointLight>],
    ambient_lighting: bool,
    max_depth: u32,
    ambient_samples: u32,
}

impl<'a> Tracer<'a> {
    /// Create a tracer that intersects against the scene by linear scan.
    pub fn new(scene: &'a Scene, config: &RenderConfig) -> Self {
        Self::with_intersector(scene, scene, config)
    }

    /// Create a tracer that answers ray queries with `world` and takes
    /// lights and options from `scene`.
    pub fn with_intersector(
        world: &'a dyn Intersector,
        scene: &'a Scene,
        config: &RenderConfig,
    ) -> Self {
        Self {
            world,
            lights: scene.lights(),
            ambient_lighting: scene.options().ambient_lighting,
            max_depth: config.max_depth,
            ambient_samples: config.ambient_samples,
        }
    }

    /// Radiance arriving along `ray`, traced at recursion level `depth`.
    ///
    /// Returns black once `depth` reaches the maximum depth, and for rays
    /// that hit nothing.
    pub fn shade(&self, ray: &Ray, depth: u32, rng: &mut dyn RngCore) -> Color {
        if depth >= self.max_depth {
            return Color::BLACK;
        }

        let Some(nearest) = self.world.nearest_hit(ray) else {
            return Color::BLACK;
        };
        let hit = &nearest.hit;

        match *hit.material {
            Material::Diffuse { color } if self.ambient_lighting => {
                self.shade_ambient(&nearest, color, depth, rng)
            }
            Material::Diffuse { color } => self.direct_light(&nearest, color),
            Material::Reflective { .. } => {
                let origin = offset_origin(&nearest, true);
                let bounce = Ray::new(origin, reflect(hit.incident, hit.normal));
                self.shade(&bounce, depth + 1, rng)
            }
            Material::Refractive {
                refractive_index, ..
            } => self.shade_refractive(&nearest, refractive_index, depth, rng),
        }
    }

    /// Sum of unshadowed point-light contributions, each
    /// `color * light * max(0, N . L)`.
    fn direct_light(&self, shading: &SceneHit<'_>, color: Color) -> Color {
        let hit = &shading.hit;

        self.lights
            .iter()
            .filter(|light| !in_shadow(self.world, shading, light))
            .map(|light| {
                let to_light = (light.position - hit.position).normalize();
                color * light.color * hit.normal.dot(to_light).max(0.0)
            })
            .sum()
    }

    /// Direct light plus a hemisphere estimate of indirect light, filtered
    /// by the surface color over pi.
    fn shade_ambient(
        &self,
        shading: &SceneHit<'_>,
        color: Color,
        depth: u32,
        rng: &mut dyn RngCore,
    ) -> Color {
        let direct = self.direct_light(shading, color);

        let mut indirect = Color::BLACK;
        if self.ambient_samples > 0 {
            let basis = Basis::from_normal(shading.hit.facing_normal());
            let origin = offset_origin(shading, true);

            for _ in 0..self.ambient_samples {
                let r1 = gen_f64(rng);
                let r2 = gen_f64(rng);
                let direction = basis.to_world(sample_hemisphere(r1, r2)).normalize();
                let sample = self.shade(&Ray::new(origin, direction), depth + 1, rng);
                indirect += sample / HEMISPHERE_PDF;
            }
            indirect /= self.ambient_samples as f64;
        }

        (direct + indirect) * color / PI
    }

    /// Fresnel-weighted blend of the transmitted and reflected rays.
    fn shade_refractive(
        &self,
        shading: &SceneHit<'_>,
        refractive_index: f64,
        depth: u32,
        rng: &mut dyn RngCore,
    ) -> Color {
        let hit = &shading.hit;
        let interface = Interface::new(hit.incident, hit.normal, refractive_index);
        let reflectance = interface.reflectance();

        let mut transmitted = Color::BLACK;
        if reflectance < 1.0 {
            if let Some(direction) = interface.refract(hit.incident) {
                let ray = Ray::new(offset_origin(shading, false), direction);
                transmitted = self.shade(&ray, depth + 1, rng);
            }
        }

        let origin = offset_origin(shading, true);
        let bounce = Ray::new(origin, reflect(hit.incident, hit.normal));
        let reflected = self.shade(&bounce, depth + 1, rng);

        transmitted * (1.0 - reflectance) + reflected * reflectance
    }
}

/// Hit position nudged off the surface, toward the side the ray came from
/// (`same_side`) or through to the other side.
fn offset_origin(shading: &SceneHit<'_>, same_side: bool) -> Vec3 {
    let hit = &shading.hit;
    let offset = hit.facing_normal() * SURFACE_OFFSET;
    if same_side {
        hit.position + offset
    } else {
        hit.position - offset
    }
}
