//! Scene description parser.
//!
//! The format is a stream of whitespace-separated tokens. Line breaks carry
//! no meaning.
//!
//! # Supported Syntax
//!
//! - `background #RRGGBB`
//! - `ambient r,g,b`
//! - `camera x,y,z`
//! - `light { pos x,y,z diffuse r,g,b specular r,g,b }`
//! - `sphere { center x,y,z radius R material NAME }`
//! - `plane { point x,y,z normal x,y,z width W material NAME }`
//! - `triangle { v0 x,y,z v1 x,y,z v2 x,y,z material NAME }`
//!
//! Fields inside a block may come in any order and default to zero when
//! omitted. Material names are `red`, `ivory` and `glass`.

use std::path::Path;
use std::str::SplitWhitespace;

use glint_math::{Point3, Vec3};
use glint_renderer::{
    color_from_rgb8, Color, Light, Material, Plane, SceneBuilder, Sphere, Triangle,
};
use thiserror::Error;

/// Errors that can occur while parsing a scene description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid hex color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("Invalid vector '{token}' in {keyword}, expected x,y,z")]
    InvalidVector { keyword: &'static str, token: String },

    #[error("Invalid number '{token}' in {keyword}")]
    InvalidNumber { keyword: &'static str, token: String },

    #[error("Unknown material '{0}'")]
    UnknownMaterial(String),

    #[error("Unknown statement '{0}'")]
    UnknownKeyword(String),

    #[error("Unknown field '{field}' in {keyword}")]
    UnknownField { keyword: &'static str, field: String },

    #[error("Expected '{{' after {keyword}, found '{found}'")]
    ExpectedBrace { keyword: &'static str, found: String },

    #[error("Unexpected end of input in {0}")]
    UnexpectedEof(&'static str),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Read and parse a scene file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneBuilder, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let builder = parse_scene(&content)?;

    log::info!(
        "Loaded scene {}: {} primitives, {} lights",
        path.display(),
        builder.primitives.len(),
        builder.lights.len()
    );
    Ok(builder)
}

/// Parse a scene description from a string.
pub fn parse_scene(content: &str) -> ParseResult<SceneBuilder> {
    SceneParser::new(content).parse()
}

/// Token-stream parser for scene descriptions.
struct SceneParser<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> SceneParser<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            tokens: content.split_whitespace(),
        }
    }

    fn parse(mut self) -> ParseResult<SceneBuilder> {
        let mut builder = SceneBuilder::new();

        while let Some(keyword) = self.tokens.next() {
            match keyword {
                "background" => {
                    builder.background = parse_hex_color(self.next_token("background")?)?
                }
                "ambient" => builder.ambient = parse_vec3("ambient", self.next_token("ambient")?)?,
                "camera" => builder.camera = parse_vec3("camera", self.next_token("camera")?)?,
                "light" => {
                    let light = self.parse_light()?;
                    builder.add_light(light);
                }
                "sphere" => {
                    let sphere = self.parse_sphere()?;
                    builder.add_primitive(sphere);
                }
                "plane" => {
                    let plane = self.parse_plane()?;
                    builder.add_primitive(plane);
                }
                "triangle" => {
                    let triangle = self.parse_triangle()?;
                    builder.add_primitive(triangle);
                }
                other => return Err(ParseError::UnknownKeyword(other.to_string())),
            }
        }

        Ok(builder)
    }

    fn next_token(&mut self, keyword: &'static str) -> ParseResult<&'a str> {
        self.tokens.next().ok_or(ParseError::UnexpectedEof(keyword))
    }

    /// Parse `{ field value ... }`, handing each pair to `field`.
    fn parse_block(
        &mut self,
        keyword: &'static str,
        mut field: impl FnMut(&str, &str) -> ParseResult<()>,
    ) -> ParseResult<()> {
        let open = self.next_token(keyword)?;
        if open != "{" {
            return Err(ParseError::ExpectedBrace {
                keyword,
                found: open.to_string(),
            });
        }

        loop {
            let name = self.next_token(keyword)?;
            if name == "}" {
                return Ok(());
            }
            let value = self.next_token(keyword)?;
            field(name, value)?;
        }
    }

    fn parse_light(&mut self) -> ParseResult<Light> {
        const KEYWORD: &str = "light";
        let mut light = Light::default();

        self.parse_block(KEYWORD, |field, value| {
            match field {
                "pos" => light.position = parse_vec3(KEYWORD, value)?,
                "diffuse" => light.diffuse = parse_vec3(KEYWORD, value)?,
                "specular" => light.specular = parse_vec3(KEYWORD, value)?,
                _ => return Err(unknown_field(KEYWORD, field)),
            }
            Ok(())
        })?;

        Ok(light)
    }

    fn parse_sphere(&mut self) -> ParseResult<Sphere> {
        const KEYWORD: &str = "sphere";
        let mut sphere = Sphere::new(Point3::ZERO, 0.0, Material::default());

        self.parse_block(KEYWORD, |field, value| {
            match field {
                "center" => sphere.center = parse_vec3(KEYWORD, value)?,
                "radius" => sphere.radius = parse_number(KEYWORD, value)?,
                "material" => sphere.material = parse_material(value)?,
                _ => return Err(unknown_field(KEYWORD, field)),
            }
            Ok(())
        })?;

        Ok(sphere)
    }

    fn parse_plane(&mut self) -> ParseResult<Plane> {
        const KEYWORD: &str = "plane";
        let mut plane = Plane::new(Point3::ZERO, Vec3::ZERO, 0.0, Material::default());

        self.parse_block(KEYWORD, |field, value| {
            match field {
                "point" => plane.point = parse_vec3(KEYWORD, value)?,
                "normal" => plane.normal = parse_vec3(KEYWORD, value)?,
                "width" => plane.width = parse_number(KEYWORD, value)?,
                "material" => plane.material = parse_material(value)?,
                _ => return Err(unknown_field(KEYWORD, field)),
            }
            Ok(())
        })?;

        if plane.normal == Vec3::ZERO {
            log::warn!("Plane at {:?} has no normal and will never be hit", plane.point);
        }
        Ok(plane)
    }

    fn parse_triangle(&mut self) -> ParseResult<Triangle> {
        const KEYWORD: &str = "triangle";
        let mut tri = Triangle::new(Point3::ZERO, Point3::ZERO, Point3::ZERO, Material::default());

        self.parse_block(KEYWORD, |field, value| {
            match field {
                "v0" => tri.v0 = parse_vec3(KEYWORD, value)?,
                "v1" => tri.v1 = parse_vec3(KEYWORD, value)?,
                "v2" => tri.v2 = parse_vec3(KEYWORD, value)?,
                "material" => tri.material = parse_material(value)?,
                _ => return Err(unknown_field(KEYWORD, field)),
            }
            Ok(())
        })?;

        Ok(tri)
    }
}

fn unknown_field(keyword: &'static str, field: &str) -> ParseError {
    ParseError::UnknownField {
        keyword,
        field: field.to_string(),
    }
}

/// Parse `#RRGGBB` into a color with channels in [0, 1].
fn parse_hex_color(token: &str) -> ParseResult<Color> {
    let invalid = || ParseError::InvalidColor(token.to_string());

    let hex = token.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(color_from_rgb8(channel(0)?, channel(2)?, channel(4)?))
}

/// Parse `x,y,z` (also used for `r,g,b` colors).
fn parse_vec3(keyword: &'static str, token: &str) -> ParseResult<Vec3> {
    let invalid = || ParseError::InvalidVector {
        keyword,
        token: token.to_string(),
    };

    let mut parts = token.split(',').map(|p| p.parse::<f64>());
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Ok(Vec3::new(x, y, z)),
        _ => Err(invalid()),
    }
}

fn parse_number(keyword: &'static str, token: &str) -> ParseResult<f64> {
    token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        keyword,
        token: token.to_string(),
    })
}

fn parse_material(name: &str) -> ParseResult<Material> {
    Material::preset(name).ok_or_else(|| ParseError::UnknownMaterial(name.to_string()))
}
