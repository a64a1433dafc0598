//! # Sphere Impostors
//!
//! Every sphere is rendered as a camera-facing quad shaded like a sphere.
//! This module only produces the per-sphere data and the shared unit quad;
//! billboarding and shading live in the renderer.

use bumper_graph::BumperGraph;
use glam::DVec3;

use crate::material::Material;

/// Draw data of one sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereImpostor {
    pub center: DVec3,
    pub radius: f64,
    pub color: [f32; 3],
}

impl SphereImpostor {
    /// Returns the material of the impostor.
    pub fn material(&self) -> Material {
        Material::sphere_impostor(self.color)
    }
}

/// Lists one impostor per graph sphere, in sphere order.
pub fn sphere_impostors(graph: &BumperGraph, color: [f32; 3]) -> Vec<SphereImpostor> {
    graph
        .spheres()
        .iter()
        .map(|s| SphereImpostor {
            center: s.center,
            radius: s.radius,
            color,
        })
        .collect()
}

/// Flattens impostors to `[cx, cy, cz, r]` per sphere.
pub fn impostors_f32(impostors: &[SphereImpostor]) -> Vec<f32> {
    impostors
        .iter()
        .flat_map(|i| {
            [
                i.center.x as f32,
                i.center.y as f32,
                i.center.z as f32,
                i.radius as f32,
            ]
        })
        .collect()
}

/// The unit quad every impostor is stretched from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpostorQuad {
    /// Corners in `[-1, 1]²`, clockwise from the upper left.
    pub corners: [[f32; 2]; 4],
    /// Two triangles over the corners.
    pub indices: [u32; 6],
}

impl ImpostorQuad {
    pub const UNIT: Self = Self {
        corners: [[-1.0, 1.0], [1.0, 1.0], [1.0, -1.0], [-1.0, -1.0]],
        indices: [0, 1, 2, 2, 3, 0],
    };

    /// Builds the unit quad.
    pub const fn new() -> Self {
        Self::UNIT
    }

    /// Corners flattened to `[x, y]` pairs.
    pub fn corners_f32(&self) -> Vec<f32> {
        self.corners.iter().flatten().copied().collect()
    }
}

impl Default for ImpostorQuad {
    fn default() -> Self {
        Self::new()
    }
}
