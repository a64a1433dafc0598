//! # Bumper Mesh
//!
//! Envelope mesh synthesis over a sphere/bumper graph.
//! Converts the current pose of a [`BumperGraph`] into one triangle mesh,
//! partitioned into a submesh per bumper shape.
//!
//! ## Architecture
//!
//! ```text
//! BumperGraph → shapes (prysmoid, quad, capsuloid) → MeshBuffers + SubMeshes
//!                  │
//!                  ├── solver  (tangent cap planes over three spheres)
//!                  └── frustum (cone-frustum bands between two spheres)
//! ```
//!
//! ## Algorithms
//!
//! - **Tangent planes**: fixed-point iteration seeded from the center plane
//! - **Frustums**: external tangent cone of two spheres, meshed as a ring band
//! - **Impostors**: per-sphere draw data for the renderer's billboards
//!
//! ## Usage
//!
//! ```rust
//! use bumper_graph::{Bumper, BumperGraph, Sphere};
//! use bumper_mesh::build_bumper_mesh;
//! use glam::DVec3;
//!
//! let graph = BumperGraph::new(
//!     vec![
//!         Sphere::new(DVec3::ZERO, 1.0),
//!         Sphere::new(DVec3::new(2.0, 0.0, 0.0), 1.0),
//!         Sphere::new(DVec3::new(1.0, 3.0_f64.sqrt(), 0.0), 1.0),
//!     ],
//!     vec![Bumper::Prysmoid([0, 1, 2])],
//! )?;
//!
//! let (buffers, report) = build_bumper_mesh(&graph)?;
//! assert!(report.is_clean());
//! assert_eq!(buffers.triangle_count(), 2 + 3 * 64);
//! # Ok::<(), bumper_mesh::MeshError>(())
//! ```

pub mod assembler;
pub mod config;
pub mod error;
pub mod frustum;
pub mod impostor;
pub mod material;
pub mod mesh;
pub mod shapes;
pub mod solver;

pub use assembler::{build_bumper_mesh, BumperMeshAssembler, RebuildReport};
pub use bumper_graph::{Bumper, BumperGraph, ShapeType, Sphere};
pub use error::MeshError;
pub use frustum::{build_frustum, TangentFrustum};
pub use impostor::{sphere_impostors, ImpostorQuad, SphereImpostor};
pub use material::{Material, ShapePalette};
pub use mesh::{MeshBuffers, SubMesh, Vertex};
pub use shapes::{GeometryIssue, IssueKind};
pub use solver::{solve_tangent_plane, Side, SolveStatus, TangentPlane, TangentPlaneSolver};
