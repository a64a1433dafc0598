//! # Bumper Graph
//!
//! The sphere/bumper graph that drives collision proxy meshing.
//!
//! A graph owns a flat list of [`Sphere`]s and a list of [`Bumper`]s. Each
//! bumper groups two, three or four spheres into a convex proxy shape. The
//! grouping is fixed at construction; an animation source later moves the
//! spheres through [`BumperGraph::set_pose`] without touching the topology.
//!
//! ## Architecture
//!
//! ```text
//! pose source → BumperGraph (spheres + bumpers) → bumper-mesh (MeshBuffers)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bumper_graph::{Bumper, BumperGraph, Sphere};
//! use glam::DVec3;
//!
//! let graph = BumperGraph::new(
//!     vec![
//!         Sphere::new(DVec3::ZERO, 1.0),
//!         Sphere::new(DVec3::new(3.0, 0.0, 0.0), 1.0),
//!     ],
//!     vec![Bumper::Capsuloid([0, 1])],
//! )?;
//! assert_eq!(graph.centroid(), Some(DVec3::new(1.5, 0.0, 0.0)));
//! # Ok::<(), bumper_graph::GraphError>(())
//! ```

pub mod bumper;
pub mod error;
pub mod graph;
pub mod sphere;

pub use bumper::{Bumper, ShapeType};
pub use error::GraphError;
pub use graph::BumperGraph;
pub use sphere::Sphere;
