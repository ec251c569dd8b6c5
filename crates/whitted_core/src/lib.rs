//! Whitted Core - Scene description and loading.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `EntityDescription`,
//!   `MaterialDescription`, `LightDescription`, `SceneOptions`
//! - **Loading**: JSON scene parsing with validation
//!
//! The renderer converts a validated description into its runtime scene.
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::load_scene;
//!
//! let description = load_scene("scene.json")?;
//! println!("Loaded {} entities, {} lights",
//!     description.entities.len(),
//!     description.lights.len());
//! ```

pub mod description;
pub mod loader;
pub mod options;

// Re-export commonly used types
pub use description::{
    EntityDescription, LightDescription, MaterialDescription, SceneDescription, ShapeDescription,
};
pub use loader::{load_scene, parse_scene, SceneError, SceneResult};
pub use options::SceneOptions;
