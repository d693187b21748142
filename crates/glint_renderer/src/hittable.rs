//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Bounds3, Material, Primitive, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// The primitive that was hit
    pub primitive: &'a Primitive,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl HitRecord<'_> {
    /// True if this hit is on exactly `primitive` (same instance, not an
    /// equal-valued copy).
    #[inline]
    pub fn is_on(&self, primitive: &Primitive) -> bool {
        std::ptr::eq(self.primitive, primitive)
    }
}

/// Anything a ray can be intersected with.
pub trait Hittable: Send + Sync {
    /// Nearest intersection of the ray with this object, if any.
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>>;

    /// Get the axis-aligned bounding box of this object.
    fn bounds(&self) -> Bounds3;
}
