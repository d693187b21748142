//! Parallel frame rendering.
//!
//! One primary ray per pixel, no anti-aliasing. Rows are grouped into bands
//! and each band is rendered on the rayon pool straight into its own slice
//! of the frame buffer.

use std::f64::consts::TAU;
use std::num::NonZeroUsize;
use std::time::Instant;

use rayon::prelude::*;

use crate::{color_to_rgb, split_rows, Band, Point3, Ray, Scene};

/// Orbit radius of the turntable camera.
pub const TURNTABLE_RADIUS: f64 = 10.0;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Field of view in degrees
    pub fov: f64,
    /// Number of row bands; defaults to the rayon thread count
    pub bands: Option<NonZeroUsize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1366,
            height: 768,
            fov: 90.0,
            bands: None,
        }
    }
}

impl RenderConfig {
    pub fn band_count(&self) -> usize {
        self.bands
            .map_or_else(rayon::current_num_threads, NonZeroUsize::get)
    }
}

/// Rendered 8-bit RGB image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y). Panics if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Mutable row-major pixels.
    pub fn pixels_mut(&mut self) -> &mut [[u8; 3]] {
        &mut self.pixels
    }

    /// Flatten to packed RGB bytes (for saving).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}

/// Render the scene from its own camera.
pub fn render(scene: &Scene, config: &RenderConfig) -> FrameBuffer {
    render_from(scene, scene.camera(), config)
}

/// Render the scene with primary rays leaving from `eye`.
///
/// Only the ray origins move; shading still uses the scene camera as the
/// viewer.
pub fn render_from(scene: &Scene, eye: Point3, config: &RenderConfig) -> FrameBuffer {
    let start = Instant::now();
    let mut frame = FrameBuffer::new(config.width, config.height);
    if config.width == 0 || config.height == 0 {
        log::warn!("Empty image {}x{}, nothing to render", config.width, config.height);
        return frame;
    }

    let bands = split_rows(config.height, config.band_count());
    let row_len = config.width as usize;

    // Hand each band its own disjoint run of rows
    let mut work = Vec::with_capacity(bands.len());
    let mut rest = frame.pixels_mut();
    for band in &bands {
        let band_len = band.row_count() as usize * row_len;
        let (rows, tail) = std::mem::take(&mut rest).split_at_mut(band_len);
        work.push((band, rows));
        rest = tail;
    }

    work.into_par_iter().for_each(|(band, rows)| render_band(scene, eye, config, band, rows));

    log::info!(
        "Rendered {}x{} in {} bands in {:.2?}",
        config.width,
        config.height,
        bands.len(),
        start.elapsed()
    );

    frame
}

/// Render the rows of one band into `rows` (exactly that band's pixels).
fn render_band(
    scene: &Scene,
    eye: Point3,
    config: &RenderConfig,
    band: &Band,
    rows: &mut [[u8; 3]],
) {
    let (width, height) = (config.width as f64, config.height as f64);

    for (y, row) in band.rows().zip(rows.chunks_mut(config.width as usize)) {
        for (x, pixel) in row.iter_mut().enumerate() {
            let ray = Ray::primary(eye, width, height, x as f64, y as f64, config.fov);
            *pixel = color_to_rgb(scene.cast_ray(&ray, 0));
        }
    }

    log::debug!("Band {} (rows {:?}) done", band.index, band.rows());
}

/// Eye position for `frame` of a `frames`-long orbit around the Y axis.
pub fn turntable_eye(frame: u32, frames: u32, radius: f64, height: f64) -> Point3 {
    let theta = if frames == 0 {
        0.0
    } else {
        TAU * frame as f64 / frames as f64
    };
    Point3::new(radius * theta.cos(), height, radius * theta.sin())
}

/// Render a full orbit of the camera around the Y axis, one frame per step.
///
/// The orbit keeps the scene camera's height. Specular highlights stay
/// computed for the scene camera on every frame.
pub fn render_turntable(scene: &Scene, config: &RenderConfig, frames: u32) -> Vec<FrameBuffer> {
    let start = Instant::now();
    let height = scene.camera().y;

    let out: Vec<FrameBuffer> = (0..frames)
        .map(|frame| {
            let eye = turntable_eye(frame, frames, TURNTABLE_RADIUS, height);
            log::debug!("Turntable frame {}/{} from {:?}", frame + 1, frames, eye);
            render_from(scene, eye, config)
        })
        .collect();

    log::info!("Rendered {} turntable frames in {:.2?}", frames, start.elapsed());
    out
}
