//! Pinhole camera for primary ray generation.

use whitted_math::{Ray, Vec3};

/// Horizontal field of view of the pinhole camera, in degrees.
pub const FIELD_OF_VIEW: f64 = 60.0;

/// Fixed pinhole camera at the world origin looking down +z.
///
/// Each pixel is covered by `aa_multiplier²` rays. With a multiplier of 1
/// the single ray goes through the pixel center; otherwise the sub-rays are
/// jittered around it with alternating signs.
#[derive(Debug, Clone)]
pub struct Camera {
    width: u32,
    height: u32,
    // tan(fov / 2)
    scale: f64,
    aspect: f64,
    // Screen-space offsets, one per ray traced through a pixel
    offsets: Vec<(f64, f64)>,
}

impl Camera {
    /// Create a camera for a `width` x `height` image.
    ///
    /// An `aa_multiplier` of 0 is treated as 1.
    pub fn new(width: u32, height: u32, aa_multiplier: u32) -> Self {
        let n = aa_multiplier.max(1);
        let offsets = if n == 1 {
            vec![(0.0, 0.0)]
        } else {
            let (w, h, nf) = (width as f64, height as f64, n as f64);
            let mut offsets = Vec::with_capacity(n as usize * n as usize);
            for i in 1..=n {
                for j in 1..=n {
                    let x_move = (i as f64 * alternating_sign(i)) / (w * nf * 2.0);
                    let y_move = (j as f64 * alternating_sign(j)) / (h * nf * 2.0);
                    offsets.push((x_move, y_move));
                }
            }
            offsets
        };

        Self {
            width,
            height,
            scale: (FIELD_OF_VIEW.to_radians() / 2.0).tan(),
            aspect: width as f64 / height.max(1) as f64,
            offsets,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of rays traced per pixel.
    pub fn samples_per_pixel(&self) -> usize {
        self.offsets.len()
    }

    /// Position of the center of pixel (x, y) on the z = 1 image plane.
    ///
    /// x grows to the right and y grows upward, so row 0 is the top of the
    /// image.
    pub fn screen_position(&self, x: u32, y: u32) -> (f64, f64) {
        let pixel_x = (x as f64 + 0.5) / self.width as f64;
        let pixel_y = (y as f64 + 0.5) / self.height as f64;

        let x_pos = (pixel_x * 2.0 - 1.0) * self.scale;
        let y_pos = (1.0 - pixel_y * 2.0) * (self.scale / self.aspect);
        (x_pos, y_pos)
    }

    /// Ray number `sample` through pixel (x, y), with a normalized direction.
    pub fn get_ray(&self, x: u32, y: u32, sample: usize) -> Ray {
        let (x_pos, y_pos) = self.screen_position(x, y);
        let (dx, dy) = self.offsets.get(sample).copied().unwrap_or((0.0, 0.0));
        Ray::normalized(Vec3::ZERO, Vec3::new(x_pos + dx, y_pos + dy, 1.0))
    }

    /// All rays traced through pixel (x, y).
    pub fn pixel_rays(&self, x: u32, y: u32) -> impl Iterator<Item = Ray> + '_ {
        (0..self.offsets.len()).map(move |sample| self.get_ray(x, y, sample))
    }
}

/// +1 for even sub-sample indices, -1 for odd.
#[inline]
fn alternating_sign(index: u32) -> f64 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}
