//! # Config Crate
//!
//! Centralized configuration constants for the bumper mesh pipeline.
//! Tessellation density, tangent-plane solver budget, numeric tolerances and
//! the per-shape material palette are all defined here so the builders never
//! carry magic numbers of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{FRUSTUM_SEGMENTS, TANGENT_SOLVER_MAX_ITERATIONS};
//!
//! // Every capsule frustum ring is sampled with the same segment count
//! let triangles_per_frustum = FRUSTUM_SEGMENTS * 2;
//! assert_eq!(triangles_per_frustum, 64);
//!
//! // The solver always terminates
//! assert!(TANGENT_SOLVER_MAX_ITERATIONS > 0);
//! ```
//!
//! ## Categories
//!
//! - **Precision**: tolerances for degenerate-geometry detection
//! - **Tessellation**: radial segments per frustum ring
//! - **Solver**: iteration budget and parallel threshold
//! - **Materials**: shape-group colors and lighting parameters
//! - **Limits**: safety bounds on buffer sizes

pub mod constants;
