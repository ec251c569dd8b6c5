//! Whitted Renderer - CPU Ray Tracing
//!
//! A recursive Whitted-style ray tracer for planes, spheres and triangles
//! lit by point lights, with optional Monte Carlo ambient lighting.
//!
//! The usual flow is: load a [`whitted_core::SceneDescription`], convert it
//! with [`Scene::from_description`], then call [`render`] or
//! [`render_parallel`] and save the resulting [`ImageBuffer`].

mod bucket;
mod camera;
mod entity;
mod hittable;
mod light;
mod material;
mod plane;
mod renderer;
mod sampling;
mod scene;
mod shadow;
mod sphere;
mod tracer;
mod triangle;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::{Camera, FIELD_OF_VIEW};
pub use entity::{intersect, Entity, EntityId};
pub use hittable::{Intersector, RayHit, SceneHit, PARALLEL_EPSILON};
pub use light::PointLight;
pub use material::{reflect, Interface, Material};
pub use plane::Plane;
pub use renderer::{render, render_pixel, render_to, ImageBuffer, ImageSink, RenderConfig};
pub use sampling::{sample_hemisphere, Basis, HEMISPHERE_PDF};
pub use scene::Scene;
pub use shadow::in_shadow;
pub use sphere::Sphere;
pub use tracer::{Tracer, SURFACE_OFFSET};
pub use triangle::Triangle;

/// Re-export the math types used throughout the public API
pub use whitted_math::{Color, Ray, Vec3};
