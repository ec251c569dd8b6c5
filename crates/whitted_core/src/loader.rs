//! JSON scene loading.
//!
//! Parses a scene document, validates it and hands back a
//! [`SceneDescription`] ready for conversion by the renderer.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::description::SceneDescription;

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Degenerate scene input: {0}")]
    Degenerate(String),
}

/// Result type for scene loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a JSON scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let description = parse_scene(&content)?;

    log::info!(
        "Loaded scene {}: {} entities, {} lights, {} materials",
        path.display(),
        description.entities.len(),
        description.lights.len(),
        description.materials.len()
    );

    Ok(description)
}

/// Parse and validate a JSON scene from a string.
pub fn parse_scene(content: &str) -> SceneResult<SceneDescription> {
    let description: SceneDescription = serde_json::from_str(content)?;
    description.validate()?;

    if description.lights.is_empty() {
        log::warn!("Scene has no point lights; diffuse surfaces will only receive ambient light");
    }
    if description.options.uses_camera_extensions() {
        log::debug!(
            "Camera placement options are set but the pinhole camera ignores them: {:?}",
            description.options
        );
    }

    Ok(description)
}
