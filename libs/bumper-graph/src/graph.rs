//! # Bumper Graph
//!
//! Owns the spheres and the bumpers that group them.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::bumper::{Bumper, ShapeType};
use crate::error::GraphError;
use crate::sphere::Sphere;

/// A validated sphere/bumper graph.
///
/// Every bumper references existing, pairwise-distinct spheres, and every
/// sphere has a finite center and a finite non-negative radius. Pose updates
/// keep both properties; the bumper list never changes after construction.
///
/// # Example
///
/// ```rust
/// use bumper_graph::{Bumper, BumperGraph, Sphere};
/// use glam::DVec3;
///
/// let mut graph = BumperGraph::new(
///     vec![Sphere::new(DVec3::ZERO, 1.0), Sphere::new(DVec3::X * 4.0, 1.0)],
///     vec![Bumper::Capsuloid([0, 1])],
/// )?;
/// graph.set_sphere(1, Sphere::new(DVec3::X * 5.0, 1.5))?;
/// assert_eq!(graph.sphere(1).map(|s| s.radius), Some(1.5));
/// # Ok::<(), bumper_graph::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGraph")]
pub struct BumperGraph {
    spheres: Vec<Sphere>,
    bumpers: Vec<Bumper>,
}

impl BumperGraph {
    /// Builds a graph, rejecting any topology or sphere contract violation.
    pub fn new(spheres: Vec<Sphere>, bumpers: Vec<Bumper>) -> Result<Self, GraphError> {
        for (index, sphere) in spheres.iter().enumerate() {
            sphere
                .check()
                .map_err(|message| GraphError::invalid_sphere(index, message))?;
        }
        for (bumper_index, bumper) in bumpers.iter().enumerate() {
            validate_bumper(bumper_index, bumper, spheres.len())?;
        }
        Ok(Self { spheres, bumpers })
    }

    /// Returns all spheres.
    #[inline]
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Returns all bumpers.
    #[inline]
    pub fn bumpers(&self) -> &[Bumper] {
        &self.bumpers
    }

    /// Returns the sphere at `index`, if any.
    #[inline]
    pub fn sphere(&self, index: usize) -> Option<&Sphere> {
        self.spheres.get(index)
    }

    /// Returns the number of spheres.
    #[inline]
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Returns the number of bumpers.
    #[inline]
    pub fn bumper_count(&self) -> usize {
        self.bumpers.len()
    }

    /// Returns true if the graph has no spheres.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Iterates the bumpers of one shape family, with their graph indices.
    pub fn bumpers_of(&self, shape: ShapeType) -> impl Iterator<Item = (usize, &Bumper)> + '_ {
        self.bumpers
            .iter()
            .enumerate()
            .filter(move |(_, bumper)| bumper.shape_type() == shape)
    }

    /// Resolves a bumper's sphere indices into spheres.
    ///
    /// Indices were checked at construction, so every lookup succeeds.
    pub fn spheres_of<'a>(&'a self, bumper: &'a Bumper) -> impl Iterator<Item = Sphere> + 'a {
        bumper
            .sphere_indices()
            .iter()
            .map(move |&index| self.spheres[index])
    }

    /// Moves or resizes one sphere.
    pub fn set_sphere(&mut self, index: usize, sphere: Sphere) -> Result<(), GraphError> {
        let sphere_count = self.spheres.len();
        let slot = self
            .spheres
            .get_mut(index)
            .ok_or(GraphError::NoSuchSphere {
                index,
                sphere_count,
            })?;
        sphere
            .check()
            .map_err(|message| GraphError::invalid_sphere(index, message))?;
        *slot = sphere;
        Ok(())
    }

    /// Replaces every sphere at once.
    ///
    /// The pose must list exactly one sphere per graph sphere. On error the
    /// graph is left untouched.
    pub fn set_pose(&mut self, spheres: &[Sphere]) -> Result<(), GraphError> {
        if spheres.len() != self.spheres.len() {
            return Err(GraphError::PoseMismatch {
                expected: self.spheres.len(),
                actual: spheres.len(),
            });
        }
        for (index, sphere) in spheres.iter().enumerate() {
            sphere
                .check()
                .map_err(|message| GraphError::invalid_sphere(index, message))?;
        }
        self.spheres.copy_from_slice(spheres);
        Ok(())
    }

    /// Arithmetic mean of all sphere centers.
    ///
    /// Returns `None` for a graph without spheres.
    pub fn centroid(&self) -> Option<DVec3> {
        if self.spheres.is_empty() {
            return None;
        }
        let sum: DVec3 = self.spheres.iter().map(|s| s.center).sum();
        Some(sum / self.spheres.len() as f64)
    }

    /// Axis-aligned box enclosing every sphere, radius included.
    ///
    /// Returns (min, max) corners, or `None` for a graph without spheres.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut spheres = self.spheres.iter();
        let first = spheres.next()?;
        let init = (
            first.center - DVec3::splat(first.radius),
            first.center + DVec3::splat(first.radius),
        );
        Some(spheres.fold(init, |(min, max), s| {
            (
                min.min(s.center - DVec3::splat(s.radius)),
                max.max(s.center + DVec3::splat(s.radius)),
            )
        }))
    }
}

fn validate_bumper(bumper_index: usize, bumper: &Bumper, sphere_count: usize) -> Result<(), GraphError> {
    let indices = bumper.sphere_indices();
    for (position, &index) in indices.iter().enumerate() {
        if index >= sphere_count {
            return Err(GraphError::SphereIndexOutOfRange {
                bumper: bumper_index,
                index,
                sphere_count,
            });
        }
        if indices[..position].contains(&index) {
            return Err(GraphError::invalid_topology(format!(
                "{} bumper {bumper_index} references sphere {index} more than once",
                bumper.shape_type()
            )));
        }
    }
    Ok(())
}

/// Unvalidated serialized form of a [`BumperGraph`].
#[derive(Deserialize)]
struct RawGraph {
    spheres: Vec<Sphere>,
    bumpers: Vec<Bumper>,
}

impl TryFrom<RawGraph> for BumperGraph {
    type Error = GraphError;

    fn try_from(raw: RawGraph) -> Result<Self, Self::Error> {
        BumperGraph::new(raw.spheres, raw.bumpers)
    }
}
