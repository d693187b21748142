use crate::{Interval, Point3, Ray, Vec3};

/// Axis-Aligned Bounding Box for spatial acceleration structures (BVH).
///
/// Stored as its minimum and maximum corner points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds3 {
    pub min: Point3,
    pub max: Point3,
}

impl Bounds3 {
    /// An empty box. Any union with a real bound yields that bound.
    pub const EMPTY: Bounds3 = Bounds3 {
        min: Point3::splat(f64::INFINITY),
        max: Point3::splat(f64::NEG_INFINITY),
    };

    /// Create a box from two corner points, in any order.
    pub fn from_points(a: Point3, b: Point3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Bounds3) -> Bounds3 {
        Bounds3 {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Smallest box containing both `self` and the point `p`.
    pub fn union_point(&self, p: Point3) -> Bounds3 {
        Bounds3 {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Vector from the min corner to the max corner.
    pub fn diagonal(&self) -> Vec3 {
        self.max - self.min
    }

    /// Get the min/max pair for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, axis: usize) -> Interval {
        Interval::new(self.min[axis], self.max[axis])
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest extent.
    ///
    /// X wins only when strictly longer than both Y and Z, Y only when
    /// strictly longer than Z.
    pub fn longest_axis(&self) -> usize {
        let d = self.diagonal();

        if d.x > d.y && d.x > d.z {
            0
        } else if d.y > d.z {
            1
        } else {
            2
        }
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    /// Slab test: does the ray hit the box anywhere in front of its origin?
    ///
    /// Only reports hit or miss, no entry distance. Boxes with zero
    /// thickness on an axis can still be hit.
    pub fn hit(&self, ray: &Ray) -> bool {
        let inv_dir = ray.inv_direction();

        let t_lo = (self.min - ray.origin) * inv_dir;
        let t_hi = (self.max - ray.origin) * inv_dir;

        // f64::min/max drop a NaN operand (0 * inf on a slab boundary), which
        // leaves that axis unconstrained instead of rejecting the box.
        let near = t_lo.x.min(t_hi.x).max(t_lo.y.min(t_hi.y)).max(t_lo.z.min(t_hi.z));
        let far = t_lo.x.max(t_hi.x).min(t_lo.y.max(t_hi.y)).min(t_lo.z.max(t_hi.z));

        far >= near && far >= 0.0
    }
}
