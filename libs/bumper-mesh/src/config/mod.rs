//! Builder-level configuration on top of the shared `config` crate.
//!
//! Keeps the shape builders decoupled from literal constants.

use config::constants::{ConfigError, GlobalConfig};

use crate::material::ShapePalette;
use crate::solver::TangentPlaneSolver;

/// Settings of one mesh assembler.
///
/// # Examples
/// ```
/// use bumper_mesh::config::BuilderConfig;
/// let cfg = BuilderConfig::default();
/// assert_eq!(cfg.segments, 32);
/// assert_eq!(cfg.solver().max_iterations, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuilderConfig {
    /// Tolerance for degenerate-geometry detection.
    pub tolerance: f64,
    /// Radial segments per frustum ring.
    pub segments: u32,
    /// Tangent plane solver iteration budget.
    pub max_iterations: u32,
    /// Tangent plane solver parallel threshold.
    pub parallel_dot: f64,
    /// Vertex budget of one rebuild.
    pub max_vertices: usize,
    /// Group colors.
    pub palette: ShapePalette,
}

impl BuilderConfig {
    /// Creates a configuration from validated explicit values.
    ///
    /// # Examples
    /// ```
    /// use bumper_mesh::config::BuilderConfig;
    /// let cfg = BuilderConfig::new(1.0e-8, 16, 200, 0.999).unwrap();
    /// assert_eq!(cfg.segments, 16);
    /// assert!(BuilderConfig::new(1.0e-8, 2, 200, 0.999).is_err());
    /// ```
    pub fn new(
        tolerance: f64,
        segments: u32,
        max_iterations: u32,
        parallel_dot: f64,
    ) -> Result<Self, ConfigError> {
        GlobalConfig::new(tolerance, segments, max_iterations, parallel_dot).map(Self::from)
    }

    /// Returns a copy using another palette.
    pub fn with_palette(self, palette: ShapePalette) -> Self {
        Self { palette, ..self }
    }

    /// Returns a copy with a different vertex budget.
    pub fn with_max_vertices(self, max_vertices: usize) -> Self {
        Self {
            max_vertices,
            ..self
        }
    }

    /// Tangent plane solver configured from these settings.
    pub fn solver(&self) -> TangentPlaneSolver {
        TangentPlaneSolver {
            max_iterations: self.max_iterations,
            parallel_dot: self.parallel_dot,
        }
    }
}

impl From<GlobalConfig> for BuilderConfig {
    fn from(global: GlobalConfig) -> Self {
        Self {
            tolerance: global.tolerance,
            segments: global.frustum_segments,
            max_iterations: global.solver_max_iterations,
            parallel_dot: global.solver_parallel_dot,
            max_vertices: global.max_vertices,
            palette: ShapePalette::default(),
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::from(GlobalConfig::default())
    }
}

#[cfg(test)]
mod tests;
