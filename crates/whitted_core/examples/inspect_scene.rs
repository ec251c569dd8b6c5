//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/spheres.json

use std::env;

use whitted_core::{load_scene, ShapeDescription};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-json>");
        return;
    }

    let path = &args[1];
    println!("Loading scene: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let options = &scene.options;
            println!("\n=== Options ===");
            println!("AA multiplier: {}", options.aa_multiplier);
            println!("Ambient lighting: {}", options.ambient_lighting);

            println!("\n=== Materials ({}) ===", scene.materials.len());
            for (name, material) in &scene.materials {
                println!("  {}: {:?}", name, material);
            }

            println!("\n=== Entities ({}) ===", scene.entities.len());
            for (i, entity) in scene.entities.iter().enumerate() {
                let kind = match entity.shape {
                    ShapeDescription::Plane { .. } => "plane",
                    ShapeDescription::Sphere { .. } => "sphere",
                    ShapeDescription::Triangle { .. } => "triangle",
                };
                println!("  [{}] {} ({})", i, kind, entity.material);
            }

            println!("\n=== Lights ({}) ===", scene.lights.len());
            for light in &scene.lights {
                println!("  {:?} {:?}", light.position, light.color);
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
