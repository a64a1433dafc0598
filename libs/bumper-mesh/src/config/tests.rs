//! Tests covering builder configuration behavior.

use super::*;
use config::constants::{
    EPSILON_TOLERANCE, FRUSTUM_SEGMENTS, MAX_VERTICES, TANGENT_SOLVER_MAX_ITERATIONS,
    TANGENT_SOLVER_PARALLEL_DOT,
};

#[test]
fn default_matches_constants() {
    let cfg = BuilderConfig::default();
    assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
    assert_eq!(cfg.segments, FRUSTUM_SEGMENTS);
    assert_eq!(cfg.max_iterations, TANGENT_SOLVER_MAX_ITERATIONS);
    assert_eq!(cfg.parallel_dot, TANGENT_SOLVER_PARALLEL_DOT);
    assert_eq!(cfg.max_vertices, MAX_VERTICES);
    assert_eq!(cfg.palette, ShapePalette::default());
}

#[test]
fn builder_validates_input() {
    let err = BuilderConfig::new(0.0, 24, 10, 0.9).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTolerance(0.0));
}

#[test]
fn solver_inherits_budget() {
    let cfg = BuilderConfig::new(1.0e-9, 8, 42, 0.99).unwrap();
    let solver = cfg.solver();
    assert_eq!(solver.max_iterations, 42);
    assert_eq!(solver.parallel_dot, 0.99);
}

#[test]
fn with_max_vertices_keeps_other_fields() {
    let cfg = BuilderConfig::default().with_max_vertices(10);
    assert_eq!(cfg.max_vertices, 10);
    assert_eq!(cfg.segments, FRUSTUM_SEGMENTS);
}
