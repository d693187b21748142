//! Surface reflectance coefficients for the Phong/Whitted shading model.

use crate::Color;

/// Reflectance coefficients of a surface.
///
/// Every coefficient is an RGB color multiplied component-wise with the
/// matching light term. `alpha` is the Phong specular exponent.
///
/// The default material is all zero and renders black.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Ambient reflectance
    pub k_ambient: Color,
    /// Diffuse (Lambert) reflectance
    pub k_diffuse: Color,
    /// Specular (Phong) reflectance
    pub k_specular: Color,
    /// Mirror reflectance, weights the recursive reflection ray
    pub k_reflection: Color,
    /// Specular exponent
    pub alpha: f64,
}

impl Material {
    /// Red rubber: strongly diffuse, broad dull highlight.
    pub const RED: Material = Material {
        k_ambient: Color::new(0.3, 0.0, 0.0),
        k_diffuse: Color::new(0.9, 0.1, 0.0),
        k_specular: Color::new(0.3, 0.3, 0.3),
        k_reflection: Color::new(0.1, 0.1, 0.1),
        alpha: 10.0,
    };

    pub const IVORY: Material = Material {
        k_ambient: Color::new(0.4, 0.4, 0.35),
        k_diffuse: Color::new(0.6, 0.6, 0.5),
        k_specular: Color::new(0.7, 0.7, 0.7),
        k_reflection: Color::new(0.2, 0.2, 0.2),
        alpha: 125.0,
    };

    /// Nearly a mirror with a very tight highlight.
    pub const GLASS: Material = Material {
        k_ambient: Color::new(0.1, 0.1, 0.1),
        k_diffuse: Color::new(0.3, 0.3, 0.3),
        k_specular: Color::new(0.7, 0.7, 0.7),
        k_reflection: Color::new(0.9, 0.9, 0.9),
        alpha: 12500.0,
    };

    /// Names accepted by [`Material::preset`].
    pub const PRESET_NAMES: [&'static str; 3] = ["red", "ivory", "glass"];

    /// Look up a named preset.
    pub fn preset(name: &str) -> Option<Material> {
        match name {
            "red" => Some(Self::RED),
            "ivory" => Some(Self::IVORY),
            "glass" => Some(Self::GLASS),
            _ => None,
        }
    }
}
