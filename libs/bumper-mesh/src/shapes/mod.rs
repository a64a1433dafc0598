//! # Shape Builders
//!
//! Cap builders per wedge shape, dispatched from [`build_bumper`], which then
//! runs one frustum along every [`Bumper::edges`] pair.
//!
//! ## Module Structure
//!
//! - `prysmoid` - three-sphere wedge: two flat caps (+ three frustums)
//! - `quad` - four-sphere wedge: two fan caps (+ four frustums)
//!
//! A capsuloid has no caps: its body is the single frustum between its two
//! spheres, and the hemispherical ends are left to the sphere impostors.
//!
//! Builders never fail. A piece without well-defined geometry is skipped,
//! logged and recorded as a [`GeometryIssue`]; the rest of the bumper is
//! still emitted.

pub mod prysmoid;
pub mod quad;

use bumper_graph::{Bumper, BumperGraph, ShapeType, Sphere};
use glam::DVec3;
use log::warn;

use crate::config::BuilderConfig;
use crate::frustum::TangentFrustum;
use crate::mesh::MeshBuffers;
use crate::solver::{Side, TangentPlane};

/// What went wrong while building one bumper.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// The frustum between two spheres was skipped.
    DegenerateFrustum { spheres: (usize, usize), reason: String },
    /// Both caps were skipped because no seed plane exists.
    DegenerateCap { reason: String },
    /// A cap was emitted from a best-effort normal.
    SolverNotConverged { side: Side, iterations: u32 },
}

/// A per-bumper geometry problem recorded during a rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryIssue {
    /// Index of the bumper in the graph.
    pub bumper: usize,
    /// Shape of that bumper.
    pub shape: ShapeType,
    /// The problem.
    pub kind: IssueKind,
}

/// Shared state of the builders for one bumper.
pub(crate) struct ShapeContext<'a> {
    pub graph: &'a BumperGraph,
    pub config: &'a BuilderConfig,
    pub buffers: &'a mut MeshBuffers,
    pub issues: &'a mut Vec<GeometryIssue>,
    pub bumper: usize,
    pub shape: ShapeType,
}

impl ShapeContext<'_> {
    /// Resolves a sphere index checked at graph construction.
    fn sphere(&self, index: usize) -> Sphere {
        self.graph.spheres()[index]
    }

    fn record(&mut self, kind: IssueKind) {
        self.issues.push(GeometryIssue {
            bumper: self.bumper,
            shape: self.shape,
            kind,
        });
    }

    /// Emits the frustum between two graph spheres, or records why it could not.
    pub(crate) fn frustum(&mut self, i: usize, j: usize) {
        let (a, b) = (self.sphere(i), self.sphere(j));
        match TangentFrustum::between(&a, &b, self.config.tolerance) {
            Ok(frustum) => frustum.emit(self.buffers, self.config.segments),
            Err(err) => {
                warn!(
                    "{} bumper {}: skipped frustum between spheres {i} and {j}: {err}",
                    self.shape, self.bumper
                );
                self.record(IssueKind::DegenerateFrustum {
                    spheres: (i, j),
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Solves the top and bottom cap planes over three graph spheres.
    ///
    /// Returns `None` (and records a [`IssueKind::DegenerateCap`]) when the
    /// centers are collinear. Unconverged solves are recorded but returned.
    pub(crate) fn cap_planes(&mut self, [i, j, k]: [usize; 3]) -> Option<(TangentPlane, TangentPlane)> {
        let (a, b, c) = (self.sphere(i), self.sphere(j), self.sphere(k));
        let (top, bottom) = match self.config.solver().solve_caps(&a, &b, &c) {
            Ok(planes) => planes,
            Err(err) => {
                warn!("{} bumper {}: skipped caps: {err}", self.shape, self.bumper);
                self.record(IssueKind::DegenerateCap {
                    reason: err.to_string(),
                });
                return None;
            }
        };

        for (side, plane) in [(Side::Top, &top), (Side::Bottom, &bottom)] {
            if !plane.converged() {
                warn!(
                    "{} bumper {}: {side:?} tangent plane did not converge in {} iterations",
                    self.shape, self.bumper, plane.iterations
                );
                self.record(IssueKind::SolverNotConverged {
                    side,
                    iterations: plane.iterations,
                });
            }
        }
        Some((top, bottom))
    }

    /// Tangent points of `plane` on the given graph spheres, in order.
    pub(crate) fn tangent_points<const N: usize>(
        &self,
        plane: &TangentPlane,
        indices: [usize; N],
    ) -> [DVec3; N] {
        indices.map(|index| plane.tangent_point(&self.sphere(index)))
    }
}

/// Builds one bumper into the context's buffers: caps first, then frustums.
pub(crate) fn build_bumper(ctx: &mut ShapeContext<'_>, bumper: &Bumper) {
    match *bumper {
        Bumper::Prysmoid(indices) => prysmoid::build_caps(ctx, indices),
        Bumper::Quad(indices) => quad::build_caps(ctx, indices),
        Bumper::Capsuloid(_) => {}
    }
    for (i, j) in bumper.edges() {
        ctx.frustum(i, j);
    }
}

/// Upper bound on the vertices one bumper emits.
pub fn vertex_estimate(shape: ShapeType, segments: u32) -> usize {
    let ring = 2 * segments as usize;
    match shape {
        ShapeType::Prysmoid => 6 + 3 * ring,
        ShapeType::Quad => 8 + 4 * ring,
        ShapeType::Capsuloid => ring,
    }
}

/// Upper bound on the triangles one bumper emits.
pub fn triangle_estimate(shape: ShapeType, segments: u32) -> usize {
    let ring = 2 * segments as usize;
    match shape {
        ShapeType::Prysmoid => 2 + 3 * ring,
        ShapeType::Quad => 4 + 4 * ring,
        ShapeType::Capsuloid => ring,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Runs one builder over a fresh graph and returns its output.
    pub fn build_single(
        spheres: Vec<Sphere>,
        bumper: Bumper,
    ) -> (MeshBuffers, Vec<GeometryIssue>) {
        let graph = BumperGraph::new(spheres, vec![bumper]).expect("valid graph");
        let config = BuilderConfig::default();
        let mut buffers = MeshBuffers::new();
        let mut issues = Vec::new();
        let mut ctx = ShapeContext {
            graph: &graph,
            config: &config,
            buffers: &mut buffers,
            issues: &mut issues,
            bumper: 0,
            shape: bumper.shape_type(),
        };
        build_bumper(&mut ctx, &bumper);
        (buffers, issues)
    }
}
