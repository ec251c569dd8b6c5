//! Frame driver and output image.
//!
//! Implements the single-threaded reference render:
//! - One or more camera rays per pixel, depending on the AA multiplier
//! - Averaging of the per-ray radiance
//! - A single clamp to [0, 1] per pixel before it is stored

use std::path::Path;
use std::time::Instant;

use image::{ImageFormat, ImageResult, Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use whitted_math::Color;

use crate::{Camera, Scene, Tracer};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Recursion depth at which shading returns black
    pub max_depth: u32,
    /// Hemisphere samples per ambient-lit diffuse hit
    pub ambient_samples: u32,
    /// Seed for the Monte Carlo random source
    pub seed: u64,
    /// Edge length of a parallel render bucket, in pixels
    pub bucket_size: u32,
    /// Worker threads for parallel rendering; `None` uses rayon's default
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            ambient_samples: 8,
            seed: 0,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
            threads: None,
        }
    }
}

/// Destination for finished pixels.
pub trait ImageSink {
    /// Store a clamped color. Coordinates satisfy `x < width`, `y < height`.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// In-memory linear RGB image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major, top row first
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Get the pixel at (x, y), or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Convert to 8-bit RGB. No gamma is applied.
    pub fn to_rgb8(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let color = self.get_pixel(x, y).unwrap_or_default();
            Rgb(color.clamped().to_array().map(channel_to_u8))
        })
    }

    /// Encode as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.to_rgb8().save_with_format(path, ImageFormat::Png)
    }
}

impl ImageSink for ImageBuffer {
    /// Writes outside the image are ignored.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }
}

#[inline]
fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Render a single pixel: trace every camera ray through it, average and
/// clamp.
pub fn render_pixel(
    camera: &Camera,
    tracer: &Tracer<'_>,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::BLACK;
    for ray in camera.pixel_rays(x, y) {
        pixel_color += tracer.shade(&ray, 0, rng);
    }

    (pixel_color / camera.samples_per_pixel() as f64).clamped()
}

/// Render every pixel of `camera`'s image into `sink`, in scanline order.
pub fn render_to(
    sink: &mut dyn ImageSink,
    camera: &Camera,
    tracer: &Tracer<'_>,
    rng: &mut dyn RngCore,
) {
    for y in 0..camera.height() {
        for x in 0..camera.width() {
            let color = render_pixel(camera, tracer, x, y, rng);
            sink.set_pixel(x, y, color);
        }
    }
}

/// Render the entire scene to an image buffer on the calling thread.
///
/// Uses one random source seeded from `config.seed`.
pub fn render(scene: &Scene, width: u32, height: u32, config: &RenderConfig) -> ImageBuffer {
    let camera = Camera::new(width, height, scene.options().aa_multiplier);
    let tracer = Tracer::new(scene, config);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut image = ImageBuffer::new(width, height);

    log::info!(
        "Rendering {}x{} ({} rays/pixel, max depth {}, ambient {})",
        width,
        height,
        camera.samples_per_pixel(),
        config.max_depth,
        scene.options().ambient_lighting
    );
    let start = Instant::now();

    render_to(&mut image, &camera, &tracer, &mut rng);

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}
