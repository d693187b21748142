mod config;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use glint_io::OutputFormat;
use glint_renderer::{render, render_turntable, Material};

use config::{FileConfig, Settings};

/// Render a scene file with the glint ray tracer.
#[derive(Parser, Debug)]
#[command(name = "glint", version, about)]
struct Args {
    /// Scene description file
    #[arg(long)]
    scene: PathBuf,

    /// OBJ mesh to add to the scene
    #[arg(long)]
    mesh: Option<PathBuf>,

    /// Material for every mesh triangle
    #[arg(long, value_parser = Material::PRESET_NAMES)]
    mesh_material: Option<String>,

    /// Output file; its extension is replaced by the format's
    #[arg(long)]
    output: Option<PathBuf>,

    /// Image format: ppm, png or gif (turntable animation)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Field of view in degrees
    #[arg(long)]
    fov: Option<f64>,

    /// Number of row bands rendered in parallel
    #[arg(long)]
    bands: Option<NonZeroUsize>,

    /// Frames in the turntable animation (gif only)
    #[arg(long)]
    frames: Option<u32>,

    /// JSON settings file; flags take precedence over it
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();
        if let Some(path) = &self.config {
            settings.apply_file(FileConfig::load(path)?)?;
        }

        if let Some(width) = self.width {
            settings.render.width = width;
        }
        if let Some(height) = self.height {
            settings.render.height = height;
        }
        if let Some(fov) = self.fov {
            settings.render.fov = fov;
        }
        if self.bands.is_some() {
            settings.render.bands = self.bands;
        }
        if let Some(frames) = self.frames {
            settings.frames = frames;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if let Some(name) = &self.mesh_material {
            settings.mesh_material = name.clone();
        }

        ensure!(
            !settings.format.is_animated() || settings.frames > 0,
            "A {} animation needs at least one frame",
            settings.format
        );
        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = args.settings()?;

    let mut builder = glint_io::load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    if let Some(path) = &args.mesh {
        let mesh = glint_io::load_obj(path)
            .with_context(|| format!("Failed to load mesh {}", path.display()))?;
        builder.extend_primitives(mesh.triangles(settings.mesh_material()?)?);
    }

    let scene = builder.build();
    let output = settings.output_path();
    let start = Instant::now();

    if settings.format.is_animated() {
        let frames = render_turntable(&scene, &settings.render, settings.frames);
        glint_io::save_gif(&frames, &output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        log::info!("Wrote {}", output.display());
    } else {
        let frame = render(&scene, &settings.render);
        glint_io::save_frame(&frame, &output, settings.format)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    log::info!("Done in {:.2?}", start.elapsed());
    Ok(())
}
