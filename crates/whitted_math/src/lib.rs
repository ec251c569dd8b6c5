//! Math types for the Whitted ray tracer.
//!
//! Geometry is carried in double precision: `Vec3` is glam's `DVec3`.

// Re-export glam for convenience
pub use glam;
pub use glam::DVec3 as Vec3;

mod color;
mod ray;

pub use color::Color;
pub use ray::Ray;
