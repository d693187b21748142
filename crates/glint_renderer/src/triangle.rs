//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{Bounds3, Material, Point3, Ray, SurfaceHit, Vec3};

/// Determinant and minimum-distance threshold.
const EPSILON: f64 = 1e-6;

/// A flat-shaded triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub v0: Point3,
    pub v1: Point3,
    pub v2: Point3,
    pub material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Point3, v1: Point3, v2: Point3, material: Material) -> Self {
        Self {
            v0,
            v1,
            v2,
            material,
        }
    }

    /// Face normal, `normalize(edge1 x edge2)`. NaN for degenerate triangles.
    pub fn normal(&self) -> Vec3 {
        (self.v1 - self.v0).cross(self.v2 - self.v0).normalize()
    }

    pub fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        self.hit_barycentric(ray).map(|(t, _, _)| SurfaceHit {
            t,
            normal: self.normal(),
        })
    }

    /// Möller-Trumbore ray-triangle intersection algorithm.
    ///
    /// Returns `(t, u, v)`: the hit lies at `(1 - u - v) * v0 + u * v1 + v * v2`.
    pub fn hit_barycentric(&self, ray: &Ray) -> Option<(f64, f64, f64)> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction.cross(edge2);
        let det = edge1.dot(h);

        // Ray is parallel to triangle (or the triangle has no area)
        if det.abs() < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin - self.v0;
        let u = inv_det * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = inv_det * ray.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = inv_det * edge2.dot(q);
        if t <= EPSILON {
            return None;
        }

        Some((t, u, v))
    }

    /// Tight box over the three vertices.
    pub fn bounds(&self) -> Bounds3 {
        Bounds3::from_points(self.v0, self.v1).union_point(self.v2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Material::default(),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let ray = Ray::new(Point3::new(0.2, 0.2, -1.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = xy_triangle().hit(&ray).unwrap();

        assert!((hit.t - 1.0).abs() < 1e-9);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_triangle_barycentrics() {
        let tri = Triangle::new(
            Point3::new(-1.0, 0.0, 2.0),
            Point3::new(3.0, 0.5, 2.0),
            Point3::new(0.0, 4.0, 3.0),
            Material::default(),
        );

        let mut hits = 0;
        for i in -4..=16 {
            for j in -4..=16 {
                let origin = Point3::new(i as f64 * 0.25, j as f64 * 0.25, -1.0);
                let ray = Ray::new(origin, Vec3::new(0.0, 0.0, 1.0));
                let Some((t, u, v)) = tri.hit_barycentric(&ray) else {
                    continue;
                };
                hits += 1;

                assert!(u >= 0.0 && v >= 0.0 && u + v <= 1.0, "u={u} v={v}");
                let p = tri.v0 * (1.0 - u - v) + tri.v1 * u + tri.v2 * v;
                assert!((p - ray.at(t)).length() < 1e-9);
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn test_triangle_hit_from_behind() {
        // Back face hits are accepted, the normal is not flipped
        let ray = Ray::new(Point3::new(0.2, 0.2, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = xy_triangle().hit(&ray).unwrap();

        assert!((hit.t - 1.0).abs() < 1e-9);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_triangle_miss() {
        // Outside the hypotenuse
        let ray = Ray::new(Point3::new(0.8, 0.8, -1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(xy_triangle().hit(&ray).is_none());

        // Pointing away
        let ray = Ray::new(Point3::new(0.2, 0.2, -1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(xy_triangle().hit(&ray).is_none());

        // Parallel to the triangle plane
        let ray = Ray::new(Point3::new(-1.0, 0.2, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(xy_triangle().hit(&ray).is_none());
    }

    #[test]
    fn test_degenerate_triangle_never_hits() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Material::default(),
        );
        let ray = Ray::new(Point3::new(1.0, 1.0, -1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(tri.hit(&ray).is_none());
    }

    #[test]
    fn test_triangle_bounds() {
        let tri = Triangle::new(
            Point3::new(-1.0, 2.0, 0.5),
            Point3::new(3.0, -1.0, 0.5),
            Point3::new(0.0, 0.0, -2.0),
            Material::default(),
        );
        let b = tri.bounds();

        assert_eq!(b.min, Point3::new(-1.0, -1.0, -2.0));
        assert_eq!(b.max, Point3::new(3.0, 2.0, 0.5));
    }
}
