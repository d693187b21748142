//! glint renderer - recursive Whitted ray tracing on the CPU.
//!
//! Scenes are assembled with a [`SceneBuilder`], which builds a BVH over the
//! primitives once. The resulting [`Scene`] is immutable and shared by all
//! rayon workers while a frame is rendered band by band.

mod band;
mod bvh;
mod color;
mod hittable;
mod light;
mod material;
mod plane;
mod primitive;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod triangle;

pub use band::{split_rows, Band};
pub use bvh::{BvhChild, BvhNode};
pub use color::{color_from_rgb8, color_to_rgb, Color};
pub use hittable::{HitRecord, Hittable};
pub use light::Light;
pub use material::Material;
pub use plane::Plane;
pub use primitive::{Primitive, SurfaceHit};
pub use renderer::{
    render, render_from, render_turntable, turntable_eye, FrameBuffer, RenderConfig,
    TURNTABLE_RADIUS,
};
pub use scene::{Scene, SceneBuilder};
pub use shading::{BIAS, MAX_DEPTH};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export common math types from glint_math
pub use glint_math::{Bounds3, Interval, Point3, Ray, Vec3};
