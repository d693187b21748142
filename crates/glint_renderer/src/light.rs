use crate::{Color, Point3};

/// A point light with separate diffuse and specular intensities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Light {
    pub position: Point3,
    pub diffuse: Color,
    pub specular: Color,
}

impl Light {
    pub fn new(position: Point3, diffuse: Color, specular: Color) -> Self {
        Self {
            position,
            diffuse,
            specular,
        }
    }
}
