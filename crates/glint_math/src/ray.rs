use crate::{Point3, Vec3};

/// Point the pinhole camera looks towards.
pub const LOOK_AT: Point3 = Point3::new(0.0, 0.0, 1.0);

/// Camera up vector used to build the view basis.
pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not required to be unit length. Shading code normalizes
/// it wherever angles matter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a secondary ray (shadow or reflection) with an explicit origin
    /// and direction.
    #[inline]
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a primary ray from the eye through the center of pixel `(x, y)`
    /// of a `width` x `height` image with a horizontal-ish field of view of
    /// `fov` degrees.
    ///
    /// The camera looks from `eye` towards [`LOOK_AT`]; the returned
    /// direction is normalized.
    pub fn primary(eye: Point3, width: f64, height: f64, x: f64, y: f64, fov: f64) -> Self {
        let aspect_ratio = width / height;
        let angle = (fov.to_radians() * 0.5).tan();

        // Screen space -> camera space
        let alpha = (2.0 * ((x + 0.5) / width) - 1.0) * angle * aspect_ratio;
        let beta = (1.0 - 2.0 * ((y + 0.5) / height)) * angle;

        // w points away from the view direction
        let w = (eye - LOOK_AT).normalize();
        let u = w.cross(UP).normalize();
        let v = u.cross(w);

        let direction = (u * alpha + v * beta - w).normalize();

        Self {
            origin: eye,
            direction,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Component-wise reciprocal of the direction, used by slab tests.
    /// Zero components become infinities.
    #[inline]
    pub fn inv_direction(&self) -> Vec3 {
        self.direction.recip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_inv_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(2.0, -4.0, 0.0));
        let inv = ray.inv_direction();

        assert_eq!(inv.x, 0.5);
        assert_eq!(inv.y, -0.25);
        assert_eq!(inv.z, f64::INFINITY);
    }

    #[test]
    fn test_primary_center_looks_forward() {
        let eye = Point3::new(0.0, 0.0, -5.0);
        // Odd resolution so the middle pixel is exactly on axis
        let ray = Ray::primary(eye, 101.0, 101.0, 50.0, 50.0, 90.0);

        assert_eq!(ray.origin, eye);
        assert!((ray.direction - Vec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_primary_orientation() {
        let eye = Point3::new(0.0, 0.0, -5.0);
        let left = Ray::primary(eye, 64.0, 48.0, 0.0, 24.0, 60.0);
        let right = Ray::primary(eye, 64.0, 48.0, 63.0, 24.0, 60.0);
        let top = Ray::primary(eye, 64.0, 48.0, 32.0, 0.0, 60.0);
        let bottom = Ray::primary(eye, 64.0, 48.0, 32.0, 47.0, 60.0);

        assert!(right.direction.x > left.direction.x);
        assert!(top.direction.y > bottom.direction.y);
        assert!((left.direction.length() - 1.0).abs() < 1e-12);
    }
}
