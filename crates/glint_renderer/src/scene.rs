//! Scene assembly and the immutable, render-ready scene.

use std::time::Instant;

use crate::{Bounds3, BvhNode, Color, HitRecord, Hittable, Light, Point3, Primitive, Ray};

/// Mutable scene description, filled in by loaders before rendering.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    /// Color returned for rays that hit nothing
    pub background: Color,
    /// Ambient light intensity
    pub ambient: Color,
    /// Eye position of the pinhole camera
    pub camera: Point3,
    pub lights: Vec<Light>,
    pub primitives: Vec<Primitive>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_light(&mut self, light: Light) -> &mut Self {
        self.lights.push(light);
        self
    }

    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) -> &mut Self {
        self.primitives.push(primitive.into());
        self
    }

    pub fn extend_primitives(
        &mut self,
        primitives: impl IntoIterator<Item = Primitive>,
    ) -> &mut Self {
        self.primitives.extend(primitives);
        self
    }

    /// Build the BVH and freeze the scene.
    pub fn build(self) -> Scene {
        let start = Instant::now();
        let bvh = BvhNode::build(&self.primitives);

        log::info!(
            "Built BVH over {} primitives: {} nodes, depth {} in {:.2?}",
            self.primitives.len(),
            bvh.node_count(),
            bvh.depth(),
            start.elapsed()
        );
        if self.primitives.is_empty() {
            log::warn!("Scene has no primitives, every pixel will be background");
        }
        if self.lights.is_empty() {
            log::warn!("Scene has no lights, only ambient and reflection terms will show");
        }

        Scene {
            background: self.background,
            ambient: self.ambient,
            camera: self.camera,
            lights: self.lights,
            primitives: self.primitives,
            bvh,
        }
    }
}

/// Immutable scene with its acceleration structure.
///
/// Safe to share across render threads; nothing is mutated after
/// [`SceneBuilder::build`].
#[derive(Debug, Clone)]
pub struct Scene {
    pub(crate) background: Color,
    pub(crate) ambient: Color,
    pub(crate) camera: Point3,
    pub(crate) lights: Vec<Light>,
    pub(crate) primitives: Vec<Primitive>,
    pub(crate) bvh: BvhNode,
}

impl Scene {
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn camera(&self) -> Point3 {
        self.camera
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn bvh(&self) -> &BvhNode {
        &self.bvh
    }

    /// Nearest hit, skipping the exact primitive instance `excluded`.
    pub fn intersect_excluding(&self, ray: &Ray, excluded: &Primitive) -> Option<HitRecord<'_>> {
        self.bvh.intersect_excluding(&self.primitives, ray, excluded)
    }
}

impl Hittable for Scene {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.bvh.intersect(&self.primitives, ray)
    }

    fn bounds(&self) -> Bounds3 {
        self.bvh.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere, Triangle, Vec3};

    #[test]
    fn test_builder_collects_everything() {
        let mut builder = SceneBuilder::new();
        builder.background = Color::new(0.1, 0.2, 0.3);
        builder.camera = Point3::new(0.0, 1.0, -5.0);
        builder
            .add_light(Light::new(Point3::new(2.0, 2.0, -2.0), Color::ONE, Color::ONE))
            .add_primitive(Sphere::new(Point3::ZERO, 1.0, Material::RED))
            .extend_primitives([Triangle::new(
                Point3::new(-5.0, -1.0, -5.0),
                Point3::new(5.0, -1.0, -5.0),
                Point3::new(0.0, -1.0, 5.0),
                Material::IVORY,
            )
            .into()]);

        let scene = builder.build();
        assert_eq!(scene.primitives().len(), 2);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.camera(), Point3::new(0.0, 1.0, -5.0));
        assert_eq!(scene.background(), Color::new(0.1, 0.2, 0.3));
        assert_eq!(scene.bvh().node_count(), 1);
        assert_eq!(scene.bounds().min, Point3::new(-5.0, -1.0, -5.0));
    }

    #[test]
    fn test_scene_intersect_uses_owned_primitives() {
        let mut builder = SceneBuilder::new();
        builder.add_primitive(Sphere::new(Point3::ZERO, 1.0, Material::GLASS));
        let scene = builder.build();

        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::Z);
        let hit = scene.intersect(&ray).unwrap();

        assert!(hit.is_on(&scene.primitives()[0]));
        assert_eq!(*hit.material, Material::GLASS);
        assert!(scene.intersect_excluding(&ray, &scene.primitives()[0]).is_none());
    }

    #[test]
    fn test_empty_scene() {
        let scene = SceneBuilder::new().build();

        assert!(matches!(scene.bvh(), BvhNode::Empty));
        assert_eq!(scene.bounds(), Bounds3::EMPTY);
        assert!(scene.intersect(&Ray::new(Point3::ZERO, Vec3::X)).is_none());
    }
}
