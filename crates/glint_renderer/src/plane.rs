//! Finite square plane patch.

use crate::{Bounds3, Material, Point3, Ray, SurfaceHit, Vec3};

/// Denominators below this are treated as a ray parallel to the plane.
const PARALLEL_EPSILON: f64 = 1e-6;

/// A square patch of a plane, centered on `point`.
///
/// Hits are clipped to `point ± width/2` on the world X and Z axes, so the
/// patch is only a true square when the normal is close to +-Y.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub point: Point3,
    pub normal: Vec3,
    pub width: f64,
    pub material: Material,
}

impl Plane {
    pub fn new(point: Point3, normal: Vec3, width: f64, material: Material) -> Self {
        Self {
            point,
            normal,
            width,
            material,
        }
    }

    pub fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }

        let half = self.width * 0.5;
        let p = ray.at(t);
        let inside_x = (self.point.x - half..=self.point.x + half).contains(&p.x);
        let inside_z = (self.point.z - half..=self.point.z + half).contains(&p.z);
        if !(inside_x && inside_z) {
            return None;
        }

        Some(SurfaceHit {
            t,
            normal: self.normal.normalize(),
        })
    }

    /// Two orthonormal vectors spanning the plane.
    fn tangents(&self) -> (Vec3, Vec3) {
        let n = self.normal;
        let u = if n.x.abs() > n.y.abs() {
            Vec3::new(-n.z, 0.0, n.x)
        } else {
            Vec3::new(0.0, -n.z, n.y)
        }
        .normalize();
        let v = n.cross(u).normalize();
        (u, v)
    }

    /// Box over the four corners `point ± (w/2)u ± (w/2)v`.
    pub fn bounds(&self) -> Bounds3 {
        let (u, v) = self.tangents();
        let half = self.width * 0.5;
        let (du, dv) = (u * half, v * half);

        [
            self.point + du + dv,
            self.point + du - dv,
            self.point - du + dv,
            self.point - du - dv,
        ]
        .into_iter()
        .fold(Bounds3::EMPTY, |b, corner| b.union_point(corner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(
            Point3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            4.0,
            Material::default(),
        )
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Point3::new(0.5, 3.0, -0.5), Vec3::new(0.0, -1.0, 0.0));
        let hit = floor().hit(&ray).unwrap();

        assert!((hit.t - 4.0).abs() < 1e-12);
        // Stored normal is normalized on the way out
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_clipped_to_width() {
        // Lands at x = 2.5, outside the 4-wide patch
        let ray = Ray::new(Point3::new(2.5, 3.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(floor().hit(&ray).is_none());

        // Exactly on the edge is still inside
        let ray = Ray::new(Point3::new(2.0, 3.0, -2.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(floor().hit(&ray).is_some());
    }

    #[test]
    fn test_plane_parallel_and_behind() {
        let parallel = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(floor().hit(&parallel).is_none());

        let away = Ray::new(Point3::new(0.0, 3.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(floor().hit(&away).is_none());
    }

    #[test]
    fn test_plane_bounds() {
        let b = floor().bounds();

        assert!((b.min - Vec3::new(-2.0, -1.0, -2.0)).length() < 1e-12);
        assert!((b.max - Vec3::new(2.0, -1.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn test_tilted_plane_bounds_contain_center() {
        let p = Plane::new(
            Point3::new(1.0, 2.0, 3.0),
            Vec3::new(1.0, 1.0, 0.0),
            2.0,
            Material::default(),
        );
        let b = p.bounds();

        assert_eq!(b.union_point(p.point), b);
        assert!((b.centroid() - p.point).length() < 1e-12);
    }
}
