//! glint math - vectors, intervals, bounding boxes and rays.
//!
//! Everything is double precision. Vectors and points are both
//! [`glam::DVec3`]; the aliases only document intent at call sites.

pub use glam;

/// A direction or offset in world space.
pub type Vec3 = glam::DVec3;

/// A position in world space.
pub type Point3 = glam::DVec3;

mod bounds;
mod interval;
mod ray;

pub use bounds::Bounds3;
pub use interval::Interval;
pub use ray::Ray;
