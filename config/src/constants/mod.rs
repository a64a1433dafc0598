//! Centralized configuration values shared across the bumper mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when classifying geometry as degenerate.
///
/// Applied to squared lengths as well as plain lengths: a frustum axis whose
/// length or slant radicand falls under this value is rejected.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Tolerance used by tests and validation when comparing distances that hold
/// by construction (tangency, ring radii).
///
/// # Examples
/// ```
/// use config::constants::GEOMETRY_TOLERANCE;
/// assert!((1.0_f64 - (1.0 + 1.0e-7)).abs() < GEOMETRY_TOLERANCE);
/// ```
pub const GEOMETRY_TOLERANCE: f64 = 1.0e-5;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Radial segments used to sample each tangent circle of a capsule frustum.
///
/// # Examples
/// ```
/// use config::constants::FRUSTUM_SEGMENTS;
/// assert_eq!(FRUSTUM_SEGMENTS, 32);
/// ```
pub const FRUSTUM_SEGMENTS: u32 = 32;

/// Smallest ring that still encloses area.
///
/// # Examples
/// ```
/// use config::constants::MIN_SEGMENTS;
/// assert_eq!(MIN_SEGMENTS, 3);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

/// Component threshold above which the frustum frame switches its helper axis
/// from world X to world Y.
///
/// Compared against the absolute X component of the normalized frustum axis.
///
/// # Examples
/// ```
/// use config::constants::HELPER_AXIS_SWITCH;
/// assert!(HELPER_AXIS_SWITCH < 1.0);
/// ```
pub const HELPER_AXIS_SWITCH: f64 = 0.99;

// =============================================================================
// SOLVER CONSTANTS
// =============================================================================

/// Iteration budget of the tangent-plane fixed-point solve.
///
/// # Examples
/// ```
/// use config::constants::TANGENT_SOLVER_MAX_ITERATIONS;
/// assert_eq!(TANGENT_SOLVER_MAX_ITERATIONS, 1000);
/// ```
pub const TANGENT_SOLVER_MAX_ITERATIONS: u32 = 1000;

/// Minimum dot product between two successive normals for the solver to treat
/// them as parallel.
///
/// # Examples
/// ```
/// use config::constants::TANGENT_SOLVER_PARALLEL_DOT;
/// assert!(TANGENT_SOLVER_PARALLEL_DOT > 0.99);
/// ```
pub const TANGENT_SOLVER_PARALLEL_DOT: f64 = 0.999;

// =============================================================================
// MATERIAL CONSTANTS
// =============================================================================

/// Material color of the prysmoid (3-sphere wedge) group. RGB in [0, 1].
pub const PRYSMOID_COLOR: [f32; 3] = [0.8, 0.5, 0.3];

/// Material color of the quad (4-sphere wedge) group. RGB in [0, 1].
pub const QUAD_COLOR: [f32; 3] = [0.8, 0.3, 0.5];

/// Material color of the capsuloid (2-sphere capsule) group. RGB in [0, 1].
pub const CAPSULOID_COLOR: [f32; 3] = [0.0, 0.0, 0.75];

/// Ambient color of sphere impostors.
pub const SPHERE_IMPOSTOR_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Diffuse color of sphere impostors.
pub const SPHERE_IMPOSTOR_DIFFUSE: [f32; 3] = [0.9, 0.9, 0.9];

/// Specular color shared by every bumper submesh.
pub const BUMPER_SPECULAR: [f32; 3] = [0.1, 0.1, 0.1];

/// Specular exponent shared by every bumper submesh.
///
/// # Examples
/// ```
/// use config::constants::BUMPER_SHININESS;
/// assert_eq!(BUMPER_SHININESS, 32.0);
/// ```
pub const BUMPER_SHININESS: f32 = 32.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices a single rebuild may emit.
///
/// Indices are exported as `u32`, so the limit must stay below `u32::MAX`.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// assert!(MAX_VERTICES as u64 <= u32::MAX as u64);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.frustum_segments, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance for degenerate-geometry detection.
    pub tolerance: f64,
    /// Radial segments per frustum ring.
    pub frustum_segments: u32,
    /// Iteration budget of the tangent-plane solver.
    pub solver_max_iterations: u32,
    /// Dot-product threshold for "parallel" in the tangent-plane solver.
    pub solver_parallel_dot: f64,
    /// Vertex budget of a single rebuild.
    pub max_vertices: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of every value.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24, 500, 0.999).expect("valid config");
    /// assert_eq!(cfg.frustum_segments, 24);
    /// ```
    pub fn new(
        tolerance: f64,
        frustum_segments: u32,
        solver_max_iterations: u32,
        solver_parallel_dot: f64,
    ) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if frustum_segments < MIN_SEGMENTS {
            return Err(ConfigError::InvalidSegments(frustum_segments));
        }
        if solver_max_iterations == 0 {
            return Err(ConfigError::InvalidIterations(solver_max_iterations));
        }
        if !(solver_parallel_dot > 0.0 && solver_parallel_dot <= 1.0) {
            return Err(ConfigError::InvalidParallelDot(solver_parallel_dot));
        }
        Ok(Self {
            tolerance,
            frustum_segments,
            solver_max_iterations,
            solver_parallel_dot,
            max_vertices: MAX_VERTICES,
        })
    }

    /// Returns a copy with a different vertex budget.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::default().with_max_vertices(64);
    /// assert_eq!(cfg.max_vertices, 64);
    /// ```
    pub fn with_max_vertices(self, max_vertices: usize) -> Self {
        Self {
            max_vertices,
            ..self
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            frustum_segments: FRUSTUM_SEGMENTS,
            solver_max_iterations: TANGENT_SOLVER_MAX_ITERATIONS,
            solver_parallel_dot: TANGENT_SOLVER_PARALLEL_DOT,
            max_vertices: MAX_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the requested segment count is too small to form a ring.
    InvalidSegments(u32),
    /// Raised when the solver would not be allowed a single iteration.
    InvalidIterations(u32),
    /// Raised when the parallel threshold lies outside (0, 1].
    InvalidParallelDot(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "frustum_segments must be >= {MIN_SEGMENTS}: {value}")
            }
            ConfigError::InvalidIterations(value) => {
                write!(f, "solver_max_iterations must be >= 1: {value}")
            }
            ConfigError::InvalidParallelDot(value) => {
                write!(f, "solver_parallel_dot must lie in (0, 1]: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
