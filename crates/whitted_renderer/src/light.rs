//! Point lights.

use whitted_core::LightDescription;
use whitted_math::{Color, Vec3};

/// An isotropic point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

impl From<LightDescription> for PointLight {
    fn from(description: LightDescription) -> Self {
        Self::new(description.position, description.color)
    }
}
