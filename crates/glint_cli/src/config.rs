//! Render settings, layered as built-in defaults < JSON file < flags.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glint_io::OutputFormat;
use glint_renderer::{Material, RenderConfig};
use serde::Deserialize;

/// Frames in a turntable animation unless overridden.
pub const DEFAULT_FRAMES: u32 = 360;

/// Optional settings file. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fov: Option<f64>,
    pub bands: Option<NonZeroUsize>,
    pub frames: Option<u32>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub mesh_material: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub render: RenderConfig,
    pub frames: u32,
    pub format: OutputFormat,
    pub output: PathBuf,
    pub mesh_material: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            frames: DEFAULT_FRAMES,
            format: OutputFormat::Ppm,
            output: PathBuf::from("image"),
            mesh_material: "red".to_string(),
        }
    }
}

impl Settings {
    /// Overlay every field the file sets.
    pub fn apply_file(&mut self, file: FileConfig) -> Result<()> {
        if let Some(width) = file.width {
            self.render.width = width;
        }
        if let Some(height) = file.height {
            self.render.height = height;
        }
        if let Some(fov) = file.fov {
            self.render.fov = fov;
        }
        if file.bands.is_some() {
            self.render.bands = file.bands;
        }
        if let Some(frames) = file.frames {
            self.frames = frames;
        }
        if let Some(format) = file.format {
            self.format = format.parse()?;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(name) = file.mesh_material {
            self.mesh_material = name;
        }
        Ok(())
    }

    /// Material applied to every mesh triangle.
    pub fn mesh_material(&self) -> Result<Material> {
        Material::preset(&self.mesh_material).with_context(|| {
            format!(
                "Unknown mesh material '{}' (expected one of {})",
                self.mesh_material,
                Material::PRESET_NAMES.join(", ")
            )
        })
    }

    /// Output path with its extension replaced by the format's.
    pub fn output_path(&self) -> PathBuf {
        self.output.with_extension(self.format.extension())
    }
}
