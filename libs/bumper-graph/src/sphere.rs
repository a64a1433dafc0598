//! # Sphere
//!
//! The weighted point every bumper is built from.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A sphere of the graph: a center and a non-negative radius.
///
/// # Example
///
/// ```rust
/// use bumper_graph::Sphere;
/// use glam::DVec3;
///
/// let s = Sphere::new(DVec3::new(1.0, 2.0, 3.0), 0.5);
/// assert_eq!(s.offset_along(DVec3::Z), DVec3::new(1.0, 2.0, 3.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
}

impl Sphere {
    /// Creates a sphere.
    pub const fn new(center: DVec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the point reached by walking `radius` along `direction` from the center.
    ///
    /// For a unit `direction` this is the tangent point of the plane with
    /// outward normal `direction`.
    #[inline]
    pub fn offset_along(&self, direction: DVec3) -> DVec3 {
        self.center + direction * self.radius
    }

    /// Checks the sphere can take part in meshing.
    ///
    /// Returns a description of the first problem found.
    pub(crate) fn check(&self) -> Result<(), String> {
        if !self.center.is_finite() {
            return Err(format!("center is not finite: {}", self.center));
        }
        if !self.radius.is_finite() {
            return Err(format!("radius is not finite: {}", self.radius));
        }
        if self.radius < 0.0 {
            return Err(format!("radius must be non-negative: {}", self.radius));
        }
        Ok(())
    }
}
