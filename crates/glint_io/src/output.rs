//! Image output: plain-text PPM, PNG and animated GIF.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use glint_renderer::FrameBuffer;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{ColorType, DynamicImage, Frame, ImageFormat, RgbImage};
use thiserror::Error;

/// Errors that can occur while writing images.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Cannot encode an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },

    #[error("No frames to encode")]
    NoFrames,

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Supported output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Ppm,
    Png,
    Gif,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Ppm, OutputFormat::Png, OutputFormat::Gif];

    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Ppm => "ppm",
            OutputFormat::Png => "png",
            OutputFormat::Gif => "gif",
        }
    }

    /// Whether this format holds an animation rather than a single frame.
    pub fn is_animated(self) -> bool {
        self == OutputFormat::Gif
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| OutputError::UnknownFormat(s.to_string()))
    }
}

/// Write a frame as plain-text PPM (`P3`), one `r g b` line per pixel.
pub fn write_ppm(frame: &FrameBuffer, out: impl Write) -> OutputResult<()> {
    let mut out = BufWriter::new(out);

    write!(out, "P3\n{} {}\n255\n", frame.width, frame.height)?;
    for [r, g, b] in frame.pixels() {
        writeln!(out, "{r} {g} {b}")?;
    }
    out.flush()?;
    Ok(())
}

/// Encode a frame as PNG.
pub fn save_png(frame: &FrameBuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    ensure_not_empty(frame)?;
    image::save_buffer_with_format(
        path,
        &frame.to_rgb_bytes(),
        frame.width,
        frame.height,
        ColorType::Rgb8,
        ImageFormat::Png,
    )?;
    Ok(())
}

/// Encode frames as an endlessly looping GIF with no delay between frames.
pub fn save_gif(frames: &[FrameBuffer], path: impl AsRef<Path>) -> OutputResult<()> {
    if frames.is_empty() {
        return Err(OutputError::NoFrames);
    }
    frames.iter().try_for_each(ensure_not_empty)?;

    let mut encoder = GifEncoder::new(BufWriter::new(File::create(path)?));
    encoder.set_repeat(Repeat::Infinite)?;

    for frame in frames {
        let rgb = RgbImage::from_raw(frame.width, frame.height, frame.to_rgb_bytes()).ok_or(
            OutputError::EmptyImage {
                width: frame.width,
                height: frame.height,
            },
        )?;
        encoder.encode_frame(Frame::new(DynamicImage::ImageRgb8(rgb).to_rgba8()))?;
    }

    log::debug!("Encoded {} GIF frames", frames.len());
    Ok(())
}

/// Write a single frame in `format`. A GIF gets one frame.
pub fn save_frame(
    frame: &FrameBuffer,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> OutputResult<()> {
    let path = path.as_ref();
    match format {
        OutputFormat::Ppm => write_ppm(frame, File::create(path)?)?,
        OutputFormat::Png => save_png(frame, path)?,
        OutputFormat::Gif => save_gif(std::slice::from_ref(frame), path)?,
    }

    log::info!("Wrote {}", path.display());
    Ok(())
}

fn ensure_not_empty(frame: &FrameBuffer) -> OutputResult<()> {
    if frame.width == 0 || frame.height == 0 {
        return Err(OutputError::EmptyImage {
            width: frame.width,
            height: frame.height,
        });
    }
    Ok(())
}
