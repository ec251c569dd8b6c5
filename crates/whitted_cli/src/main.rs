mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use whitted_core::load_scene;
use whitted_renderer::{render, render_parallel, RenderConfig, Scene};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting whitted");

    let mut description = load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    if let Some(aa) = args.aa {
        description.options.aa_multiplier = aa;
    }
    if args.ambient {
        description.options.ambient_lighting = true;
    }

    let scene = Scene::from_description(&description).context("Failed to build scene")?;

    let config = RenderConfig {
        max_depth: args.max_depth,
        ambient_samples: args.samples,
        seed: args.seed,
        threads: args.threads,
        ..RenderConfig::default()
    };

    let image = if args.single_threaded {
        render(&scene, args.width, args.height, &config)
    } else {
        render_parallel(&scene, args.width, args.height, &config)
    };

    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
