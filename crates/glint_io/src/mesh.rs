//! Triangle mesh loading from Wavefront OBJ.
//!
//! Files are read with `tobj`, which fan-triangulates polygons. All models in
//! a file are concatenated into one indexed mesh, which can then be turned
//! into renderer triangles sharing a single material.

use std::io::BufRead;
use std::path::Path;

use glint_math::{Bounds3, Point3};
use glint_renderer::{Material, Primitive, Triangle};
use thiserror::Error;

/// Errors that can occur while loading or converting a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("OBJ load error: {0}")]
    Load(#[from] tobj::LoadError),

    #[error("Face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// A mesh consisting of vertex positions and triangle indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    pub positions: Vec<Point3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Axis-aligned bounding box of the positions
    pub bounds: Bounds3,
}

impl Mesh {
    /// Create a new mesh from positions and indices.
    pub fn new(positions: Vec<Point3>, indices: Vec<u32>) -> Self {
        let bounds = positions
            .iter()
            .fold(Bounds3::EMPTY, |b, &p| b.union_point(p));

        Self {
            positions,
            indices,
            bounds,
        }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the mesh center (center of bounding box).
    pub fn center(&self) -> Point3 {
        self.bounds.centroid()
    }

    /// One flat triangle per face, all using `material`.
    pub fn triangles(&self, material: Material) -> Result<Vec<Primitive>, MeshError> {
        let vertex = |face: usize, index: u32| {
            self.positions
                .get(index as usize)
                .copied()
                .ok_or(MeshError::IndexOutOfRange {
                    face,
                    index,
                    vertex_count: self.positions.len(),
                })
        };

        self.indices
            .chunks_exact(3)
            .enumerate()
            .map(|(face, idx)| -> Result<Primitive, MeshError> {
                Ok(Triangle::new(
                    vertex(face, idx[0])?,
                    vertex(face, idx[1])?,
                    vertex(face, idx[2])?,
                    material,
                )
                .into())
            })
            .collect()
    }

    /// Build one mesh out of every model in an OBJ file.
    fn from_models(models: &[tobj::Model]) -> Self {
        let mut positions = Vec::new();
        let mut indices = Vec::new();

        for model in models {
            let offset = positions.len() as u32;
            positions.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Point3::new(p[0] as f64, p[1] as f64, p[2] as f64)),
            );
            indices.extend(model.mesh.indices.iter().map(|i| i + offset));

            log::debug!(
                "OBJ model '{}': {} vertices, {} triangles",
                model.name,
                model.mesh.positions.len() / 3,
                model.mesh.indices.len() / 3
            );
        }

        Self::new(positions, indices)
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

/// Load an OBJ file into a single mesh. Materials in the file are ignored.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, MeshError> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(path, &load_options())?;
    let mesh = Mesh::from_models(&models);

    if mesh.triangle_count() == 0 {
        log::warn!("OBJ file {} has no faces", path.display());
    }
    log::info!(
        "Loaded mesh {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Load OBJ data from a reader. `mtllib` references are not followed.
pub fn load_obj_from_reader(reader: &mut impl BufRead) -> Result<Mesh, MeshError> {
    let (models, _materials) =
        tobj::load_obj_buf(reader, &load_options(), |_| Err(tobj::LoadError::OpenFileFailed))?;
    Ok(Mesh::from_models(&models))
}
