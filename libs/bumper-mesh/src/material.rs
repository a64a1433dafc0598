//! # Materials
//!
//! Lighting parameters handed to the renderer with each draw batch.

use bumper_graph::ShapeType;
use config::constants::{
    BUMPER_SHININESS, BUMPER_SPECULAR, CAPSULOID_COLOR, PRYSMOID_COLOR, QUAD_COLOR,
    SPHERE_IMPOSTOR_COLOR, SPHERE_IMPOSTOR_DIFFUSE,
};

/// Phong material of one draw batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl Material {
    /// Material of a bumper submesh: the group color drives ambient and diffuse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bumper_mesh::Material;
    ///
    /// let m = Material::bumper([0.8, 0.5, 0.3]);
    /// assert_eq!(m.ambient, m.diffuse);
    /// assert_eq!(m.shininess, 32.0);
    /// ```
    pub const fn bumper(color: [f32; 3]) -> Self {
        Self {
            ambient: color,
            diffuse: color,
            specular: BUMPER_SPECULAR,
            shininess: BUMPER_SHININESS,
        }
    }

    /// Material of the sphere impostors: flat, no specular highlight.
    pub const fn sphere_impostor(color: [f32; 3]) -> Self {
        Self {
            ambient: color,
            diffuse: SPHERE_IMPOSTOR_DIFFUSE,
            specular: [0.0; 3],
            shininess: 0.0,
        }
    }
}

/// Fixed color per shape group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePalette {
    pub prysmoid: [f32; 3],
    pub quad: [f32; 3],
    pub capsuloid: [f32; 3],
    pub sphere: [f32; 3],
}

impl ShapePalette {
    /// Returns the group color of a shape.
    pub const fn color(&self, shape: ShapeType) -> [f32; 3] {
        match shape {
            ShapeType::Prysmoid => self.prysmoid,
            ShapeType::Quad => self.quad,
            ShapeType::Capsuloid => self.capsuloid,
        }
    }
}

impl Default for ShapePalette {
    fn default() -> Self {
        Self {
            prysmoid: PRYSMOID_COLOR,
            quad: QUAD_COLOR,
            capsuloid: CAPSULOID_COLOR,
            sphere: SPHERE_IMPOSTOR_COLOR,
        }
    }
}
