//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Every bucket gets its own random source,
//! seeded from the render seed and the bucket's position, so a given seed
//! produces the same image however the buckets are scheduled.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use whitted_math::Color;

use crate::renderer::{render_pixel, ImageBuffer, ImageSink, RenderConfig};
use crate::{Camera, Scene, Tracer};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Seed for this bucket's random source.
    ///
    /// Depends only on the render seed and the bucket's top-left corner.
    pub fn seed(&self, render_seed: u64) -> u64 {
        let position = ((self.y as u64) << 32) | self.x as u64;
        render_seed ^ position.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// Generate buckets for an image, sorted in spiral order from center.
///
/// A `bucket_size` of 0 is treated as 1.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from the image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f64 + b.width as f64 / 2.0;
        let by = b.y as f64 + b.height as f64 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Clamped pixel colors in row-major order within the bucket
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their place in `sink`.
    pub fn write_to(&self, sink: &mut dyn ImageSink) {
        let width = self.bucket.width.max(1) as usize;
        for (i, color) in self.pixels.iter().enumerate() {
            let x = self.bucket.x + (i % width) as u32;
            let y = self.bucket.y + (i / width) as u32;
            sink.set_pixel(x, y, *color);
        }
    }
}

/// Render a single bucket with its own seeded random source.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    tracer: &Tracer<'_>,
    render_seed: u64,
) -> BucketResult {
    let mut rng = StdRng::seed_from_u64(bucket.seed(render_seed));
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(
                camera,
                tracer,
                bucket.x + local_x,
                bucket.y + local_y,
                &mut rng,
            );
            pixels.push(color);
        }
    }

    BucketResult::new(*bucket, pixels)
}

/// Render the scene across rayon worker threads.
///
/// With `config.threads` set, a dedicated pool of that size is used;
/// otherwise the global rayon pool.
pub fn render_parallel(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> ImageBuffer {
    let camera = Camera::new(width, height, scene.options().aa_multiplier);
    let tracer = Tracer::new(scene, config);
    let buckets = generate_buckets(width, height, config.bucket_size);

    log::info!(
        "Rendering {}x{} in {} buckets of {}px ({} rays/pixel, max depth {}, ambient {})",
        width,
        height,
        buckets.len(),
        config.bucket_size,
        camera.samples_per_pixel(),
        config.max_depth,
        scene.options().ambient_lighting
    );
    let start = Instant::now();

    let render_all = || -> Vec<BucketResult> {
        buckets
            .par_iter()
            .map(|bucket| {
                let result = render_bucket(bucket, &camera, &tracer, config.seed);
                log::debug!(
                    "Bucket {} at ({}, {}) done, {} pixels",
                    bucket.index,
                    bucket.x,
                    bucket.y,
                    bucket.pixel_count()
                );
                result
            })
            .collect()
    };

    let results = match config.threads {
        Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(render_all),
            Err(e) => {
                log::warn!("Could not build a {threads}-thread pool ({e}), using the global pool");
                render_all()
            }
        },
        None => render_all(),
    };

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        result.write_to(&mut image);
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}
