//! Render options that travel with a scene.

use serde::{Deserialize, Serialize};
use whitted_math::Vec3;

/// Immutable per-scene render configuration.
///
/// Only `aa_multiplier` and `ambient_lighting` affect the image produced by
/// the baseline renderer. The camera placement and depth-of-field fields are
/// accepted and carried through for richer camera models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    /// Samples per pixel along each axis (2 => 4 samples, 3 => 9 samples).
    pub aa_multiplier: u32,

    /// Enables the Monte Carlo indirect lighting branch for diffuse surfaces.
    pub ambient_lighting: bool,

    /// Camera position in the scene.
    pub camera_position: Vec3,

    /// Camera rotation axis.
    pub camera_axis: Vec3,

    /// Camera rotation angle in degrees around `camera_axis`.
    pub camera_angle: f64,

    /// Aperture radius for depth of field.
    pub aperture_radius: f64,

    /// Focal length for depth of field.
    pub focal_length: f64,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            aa_multiplier: 1,
            ambient_lighting: false,
            camera_position: Vec3::ZERO,
            camera_axis: Vec3::Y,
            camera_angle: 0.0,
            aperture_radius: 0.0,
            focal_length: 1.0,
        }
    }
}

impl SceneOptions {
    /// Set the anti-aliasing multiplier.
    pub fn with_aa_multiplier(mut self, aa_multiplier: u32) -> Self {
        self.aa_multiplier = aa_multiplier;
        self
    }

    /// Enable or disable ambient lighting.
    pub fn with_ambient_lighting(mut self, enabled: bool) -> Self {
        self.ambient_lighting = enabled;
        self
    }

    /// Number of camera rays traced per pixel.
    pub fn samples_per_pixel(&self) -> u64 {
        u64::from(self.aa_multiplier) * u64::from(self.aa_multiplier)
    }

    /// True if any of the reserved camera fields differ from a fixed pinhole
    /// at the origin.
    pub fn uses_camera_extensions(&self) -> bool {
        let defaults = Self::default();
        self.camera_position != defaults.camera_position
            || self.camera_axis != defaults.camera_axis
            || self.camera_angle != defaults.camera_angle
            || self.aperture_radius != defaults.aperture_radius
            || self.focal_length != defaults.focal_length
    }
}
