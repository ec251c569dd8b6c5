//! Simple Whitted ray tracer example.
//!
//! Builds a small scene in code (floor, mirror, glass, triangle and a row
//! of diffuse spheres) and saves it as PNG.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use whitted_core::SceneOptions;
use whitted_renderer::{
    render_parallel, Color, Entity, Material, Plane, PointLight, RenderConfig, Scene, Sphere,
    Triangle, Vec3,
};

fn main() {
    println!("Whitted Ray Tracer - Simple Example");
    println!("===================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!(
        "Scene built in {:?} ({} entities, {} lights)",
        start.elapsed(),
        scene.entity_count(),
        scene.light_count()
    );

    let (width, height) = (800, 450);
    let config = RenderConfig {
        ambient_samples: 8,
        max_depth: 4,
        seed: 1,
        ..RenderConfig::default()
    };

    println!(
        "Rendering {}x{} @ {} rays/pixel...",
        width,
        height,
        scene.options().samples_per_pixel()
    );

    let start = std::time::Instant::now();
    let image = render_parallel(&scene, width, height, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    if let Err(e) = image.save_png(filename) {
        eprintln!("Failed to save {}: {}", filename, e);
        std::process::exit(1);
    }
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let options = SceneOptions::default()
        .with_aa_multiplier(2)
        .with_ambient_lighting(false);
    let mut scene = Scene::new(options);

    let mut add = |entity: Entity| {
        scene.add_entity(Arc::new(entity));
    };

    // Floor and back wall
    add(Plane::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::Y,
        Material::diffuse(Color::new(0.8, 0.8, 0.8)),
    )
    .into());
    add(Plane::new(
        Vec3::new(0.0, 0.0, 12.0),
        Vec3::new(0.0, 0.0, -1.0),
        Material::diffuse(Color::new(0.4, 0.5, 0.7)),
    )
    .into());

    // Mirror and glass
    add(Sphere::new(
        Vec3::new(-1.5, 0.0, 7.0),
        1.0,
        Material::reflective(Color::WHITE),
    )
    .into());
    add(Sphere::new(
        Vec3::new(1.2, -0.2, 5.0),
        0.8,
        Material::refractive(Color::WHITE, 1.5),
    )
    .into());

    add(Triangle::new(
        Vec3::new(1.0, -1.0, 9.0),
        Vec3::new(3.5, -1.0, 9.5),
        Vec3::new(2.2, 1.5, 9.2),
        Material::diffuse(Color::new(0.9, 0.7, 0.1)),
    )
    .into());

    // Row of small diffuse spheres with random colors
    let mut rng = StdRng::seed_from_u64(2024);
    for i in 0..6 {
        let albedo = Color::new(
            rng.gen::<f64>() * rng.gen::<f64>(),
            rng.gen::<f64>() * rng.gen::<f64>(),
            rng.gen::<f64>() * rng.gen::<f64>(),
        );
        add(Sphere::new(
            Vec3::new(-3.0 + i as f64 * 1.2, -0.7, 10.0),
            0.3,
            Material::diffuse(albedo),
        )
        .into());
    }

    scene.add_point_light(Arc::new(PointLight::new(
        Vec3::new(-3.0, 4.0, 2.0),
        Color::new(0.7, 0.7, 0.7),
    )));
    scene.add_point_light(Arc::new(PointLight::new(
        Vec3::new(3.0, 3.0, 4.0),
        Color::new(0.4, 0.4, 0.4),
    )));

    scene
}
