use crate::{Bounds3, HitRecord, Hittable, Material, Plane, Point3, Ray, Sphere, Triangle, Vec3};

/// Distance and normal of a shape intersection, before the hit is tied to a
/// primitive and material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub t: f64,
    pub normal: Vec3,
}

/// Any shape the renderer can trace.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Primitive {
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => &s.material,
            Primitive::Plane(p) => &p.material,
            Primitive::Triangle(t) => &t.material,
        }
    }

    /// Midpoint of the bounding box, used for BVH partitioning.
    pub fn centroid(&self) -> Point3 {
        self.bounds().centroid()
    }
}

impl Hittable for Primitive {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let hit = match self {
            Primitive::Sphere(s) => s.hit(ray),
            Primitive::Plane(p) => p.hit(ray),
            Primitive::Triangle(t) => t.hit(ray),
        }?;

        Some(HitRecord {
            t: hit.t,
            normal: hit.normal,
            primitive: self,
            material: self.material(),
        })
    }

    fn bounds(&self) -> Bounds3 {
        match self {
            Primitive::Sphere(s) => s.bounds(),
            Primitive::Plane(p) => p.bounds(),
            Primitive::Triangle(t) => t.bounds(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Plane> for Primitive {
    fn from(p: Plane) -> Self {
        Primitive::Plane(p)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_hit_carries_identity_and_material() {
        let prim = Primitive::from(Sphere::new(Point3::ZERO, 1.0, Material::IVORY));
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::Z);

        let rec = prim.intersect(&ray).unwrap();
        assert!(rec.is_on(&prim));
        assert_eq!(*rec.material, Material::IVORY);
        assert!((rec.t - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_equal_copies_are_distinct_primitives() {
        let a = Primitive::from(Sphere::new(Point3::ZERO, 1.0, Material::RED));
        let b = a.clone();
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::Z);

        let rec = a.intersect(&ray).unwrap();
        assert_eq!(a, b);
        assert!(!rec.is_on(&b));
    }

    #[test]
    fn test_primitive_centroid() {
        let tri = Primitive::from(Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Material::default(),
        ));

        // Box midpoint, not the vertex average
        assert_eq!(tri.centroid(), Point3::new(2.0, 1.0, 0.0));
    }
}
