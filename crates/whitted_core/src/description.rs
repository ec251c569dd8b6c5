//! Scene description types.
//!
//! These map one-to-one onto the JSON scene format and stay independent of
//! the renderer's runtime representation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use whitted_math::{Color, Vec3};

use crate::loader::{SceneError, SceneResult};
use crate::options::SceneOptions;

/// Below this squared length a normal or triangle cross product is treated
/// as degenerate.
const DEGENERATE_EPSILON: f64 = 1e-24;

/// How a surface responds to light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDescription {
    /// Lambertian surface lit by point lights (and optionally by ambient light).
    Diffuse { color: Color },

    /// Perfect mirror.
    Reflective { color: Color },

    /// Dielectric splitting light between reflection and transmission.
    Refractive { color: Color, refractive_index: f64 },
}

impl MaterialDescription {
    /// Base color of the material.
    pub fn color(&self) -> Color {
        match *self {
            MaterialDescription::Diffuse { color }
            | MaterialDescription::Reflective { color }
            | MaterialDescription::Refractive { color, .. } => color,
        }
    }
}

/// Geometric shape of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    /// Infinite plane through `center` facing `normal`.
    Plane { center: Vec3, normal: Vec3 },

    /// Sphere given by its center and radius.
    Sphere { center: Vec3, radius: f64 },

    /// Triangle with counter-clockwise winding v0 -> v1 -> v2.
    Triangle { v0: Vec3, v1: Vec3, v2: Vec3 },
}

/// A renderable entity: a shape plus the name of its material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDescription {
    #[serde(flatten)]
    pub shape: ShapeDescription,

    /// Key into `SceneDescription::materials`
    pub material: String,
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: Vec3,
    pub color: Color,
}

/// A complete scene document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub options: SceneOptions,

    /// Named materials referenced by entities
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDescription>,

    #[serde(default)]
    pub entities: Vec<EntityDescription>,

    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

impl SceneDescription {
    /// Look up a material by name.
    pub fn material(&self, name: &str) -> SceneResult<&MaterialDescription> {
        self.materials
            .get(name)
            .ok_or_else(|| SceneError::UnknownMaterial(name.to_string()))
    }

    /// Check the description for inputs the renderer cannot handle.
    ///
    /// Degenerate geometry would otherwise produce NaN normals during
    /// intersection, so it is rejected here instead.
    pub fn validate(&self) -> SceneResult<()> {
        if self.options.aa_multiplier == 0 {
            return Err(SceneError::InvalidOption(
                "aa_multiplier must be at least 1".to_string(),
            ));
        }

        for (name, material) in &self.materials {
            if let MaterialDescription::Refractive {
                refractive_index, ..
            } = material
            {
                if refractive_index.is_nan() || *refractive_index <= 0.0 {
                    return Err(SceneError::Degenerate(format!(
                        "material '{name}' has non-positive refractive index {refractive_index}"
                    )));
                }
            }
        }

        for (index, entity) in self.entities.iter().enumerate() {
            self.material(&entity.material)?;
            validate_shape(index, &entity.shape)?;
        }

        Ok(())
    }
}

fn validate_shape(index: usize, shape: &ShapeDescription) -> SceneResult<()> {
    match *shape {
        ShapeDescription::Plane { normal, .. } => {
            if normal.length_squared() < DEGENERATE_EPSILON {
                return Err(SceneError::Degenerate(format!(
                    "entity {index}: plane normal has zero length"
                )));
            }
        }
        ShapeDescription::Sphere { radius, .. } => {
            if radius.is_nan() || radius <= 0.0 {
                return Err(SceneError::Degenerate(format!(
                    "entity {index}: sphere radius {radius} is not positive"
                )));
            }
        }
        ShapeDescription::Triangle { v0, v1, v2 } => {
            if (v1 - v0).cross(v2 - v0).length_squared() < DEGENERATE_EPSILON {
                return Err(SceneError::Degenerate(format!(
                    "entity {index}: triangle has zero area"
                )));
            }
        }
    }
    Ok(())
}
