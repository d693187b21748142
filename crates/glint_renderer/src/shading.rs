//! Recursive Whitted shading: ambient, Lambert diffuse, Phong specular,
//! hard shadows and mirror reflection.

use crate::{Color, Hittable, Interval, Point3, Ray, Scene, Vec3};

/// Recursion depth at which rays stop and return the background.
pub const MAX_DEPTH: u32 = 3;

/// Offset along the normal applied to secondary ray origins.
pub const BIAS: f64 = 1e-7;

impl Scene {
    /// Color seen along `ray`. Specular highlights are always computed for
    /// a viewer at the scene camera, whatever the ray's origin.
    pub fn cast_ray(&self, ray: &Ray, depth: u32) -> Color {
        if depth >= MAX_DEPTH {
            return self.background;
        }

        let Some(hit) = self.intersect(ray) else {
            return self.background;
        };

        let material = hit.material;
        let normal = hit.normal;
        let point = ray.at(hit.t);
        let view = (self.camera - point).normalize();

        let reflect_dir = reflect(ray.direction.normalize(), normal).normalize();
        let reflect_ray = Ray::new(offset_origin(point, normal, reflect_dir), reflect_dir);
        let reflective = self.cast_ray(&reflect_ray, depth + 1) * material.k_reflection;

        let mut diffuse = Color::ZERO;
        let mut specular = Color::ZERO;

        for light in &self.lights {
            let to_light = light.position - point;
            let light_distance = to_light.length();
            let light_dir = to_light.normalize();

            let shadow_ray = Ray::new(offset_origin(point, normal, light_dir), light_dir);
            let blocked = self
                .intersect_excluding(&shadow_ray, hit.primitive)
                .is_some_and(|occluder| Interval::new(0.0, light_distance).surrounds(occluder.t));
            if blocked {
                continue;
            }

            let diffuse_factor = normal.dot(light_dir).max(0.0);
            let r = normal * (2.0 * diffuse_factor) - light_dir;
            let specular_factor = view.dot(r).max(0.0).powf(material.alpha);

            diffuse += light.diffuse * material.k_diffuse * diffuse_factor;
            specular += light.specular * material.k_specular * specular_factor;
        }

        self.ambient * material.k_ambient + diffuse + specular + reflective
    }
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Nudge a secondary ray origin off the surface, to the side `dir` leaves by.
#[inline]
fn offset_origin(point: Point3, normal: Vec3, dir: Vec3) -> Point3 {
    if normal.dot(dir) < 0.0 {
        point - normal * BIAS
    } else {
        point + normal * BIAS
    }
}
