//! Sphere primitive for ray tracing.

use crate::{Bounds3, Material, Point3, Ray, SurfaceHit, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Intersect a ray with the sphere.
    ///
    /// Returns the nearer of the two roots even when it lies behind the ray
    /// origin; callers that care filter on `t`.
    pub fn hit(&self, ray: &Ray) -> Option<SurfaceHit> {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (h - discriminant.sqrt()) / a;
        let normal = (ray.at(t) - self.center).normalize();

        Some(SurfaceHit { t, normal })
    }

    /// Cube of side 2r around the center.
    pub fn bounds(&self) -> Bounds3 {
        let rvec = Vec3::splat(self.radius);
        Bounds3::from_points(self.center - rvec, self.center + rvec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Point3::ZERO, 1.0, Material::default())
    }

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = unit_sphere().hit(&ray).unwrap();

        assert!((hit.t - 4.0).abs() < 1e-12);
        assert!((hit.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_sphere_hit_unnormalized_direction() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 2.0));
        let hit = unit_sphere().hit(&ray).unwrap();

        // Same point, half the parameter
        assert!((hit.t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        // Ray passing beside the sphere
        let ray = Ray::new(Point3::new(2.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(unit_sphere().hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_returns_negative_root() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = unit_sphere().hit(&ray).unwrap();
        assert!((hit.t + 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_bounds() {
        let s = Sphere::new(Point3::new(1.0, -2.0, 3.0), 0.5, Material::default());
        let b = s.bounds();

        assert_eq!(b.min, Point3::new(0.5, -2.5, 2.5));
        assert_eq!(b.max, Point3::new(1.5, -1.5, 3.5));
        assert_eq!(b.centroid(), s.center);
    }
}
