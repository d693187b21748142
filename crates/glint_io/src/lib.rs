//! glint I/O - everything that touches files.
//!
//! This crate provides:
//!
//! - **Scene files**: a small whitespace-separated text format, parsed into a
//!   [`SceneBuilder`](glint_renderer::SceneBuilder)
//! - **Meshes**: Wavefront OBJ loading via `tobj`, turned into triangles
//! - **Output**: PPM (`P3`), PNG and animated GIF encoders for rendered frames
//!
//! # Example
//!
//! ```ignore
//! use glint_io::{load_scene, save_png};
//! use glint_renderer::{render, RenderConfig};
//!
//! let scene = load_scene("scenes/spheres.scene")?.build();
//! let frame = render(&scene, &RenderConfig::default());
//! save_png(&frame, "spheres.png")?;
//! ```

pub mod mesh;
pub mod output;
pub mod parser;

// Re-export commonly used types
pub use mesh::{load_obj, Mesh, MeshError};
pub use output::{save_frame, save_gif, save_png, write_ppm, OutputError, OutputFormat};
pub use parser::{load_scene, parse_scene, LoadError, ParseError};
