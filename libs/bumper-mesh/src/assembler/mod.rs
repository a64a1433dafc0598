//! # Mesh Assembler
//!
//! Owns the rebuild sequence: clear, build every shape group in
//! [`ShapeType::BUILD_ORDER`], record one submesh per group.
//!
//! The graph is borrowed per call, so the pose source is free to mutate it
//! between rebuilds. Nothing is cached across calls.

use bumper_graph::{BumperGraph, ShapeType, Sphere};
use log::debug;

use crate::config::BuilderConfig;
use crate::error::MeshError;
use crate::mesh::{MeshBuffers, SubMesh};
use crate::shapes::{self, GeometryIssue, IssueKind, ShapeContext};

/// Summary of the last rebuild.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RebuildReport {
    /// Number of bumpers visited.
    pub bumpers_built: usize,
    /// Skipped or best-effort pieces, in build order.
    pub issues: Vec<GeometryIssue>,
}

impl RebuildReport {
    /// Returns true if every bumper was emitted in full.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of frustums skipped as degenerate.
    pub fn degenerate_frustums(&self) -> usize {
        self.count(|kind| matches!(kind, IssueKind::DegenerateFrustum { .. }))
    }

    /// Number of bumpers whose caps were skipped.
    pub fn degenerate_caps(&self) -> usize {
        self.count(|kind| matches!(kind, IssueKind::DegenerateCap { .. }))
    }

    /// Number of cap planes emitted from an unconverged solve.
    pub fn unconverged_solves(&self) -> usize {
        self.count(|kind| matches!(kind, IssueKind::SolverNotConverged { .. }))
    }

    fn count(&self, predicate: impl Fn(&IssueKind) -> bool) -> usize {
        self.issues.iter().filter(|issue| predicate(&issue.kind)).count()
    }

    fn clear(&mut self) {
        self.bumpers_built = 0;
        self.issues.clear();
    }
}

/// Rebuilds the envelope mesh of a bumper graph.
///
/// # Example
///
/// ```rust
/// use bumper_graph::{Bumper, BumperGraph, ShapeType, Sphere};
/// use bumper_mesh::BumperMeshAssembler;
/// use glam::DVec3;
///
/// let graph = BumperGraph::new(
///     vec![
///         Sphere::new(DVec3::ZERO, 1.0),
///         Sphere::new(DVec3::new(3.0, 0.0, 0.0), 1.0),
///     ],
///     vec![Bumper::Capsuloid([0, 1])],
/// )?;
///
/// let mut assembler = BumperMeshAssembler::default();
/// let report = assembler.update(&graph)?;
/// assert!(report.is_clean());
///
/// let capsules = assembler.submesh(ShapeType::Capsuloid).unwrap();
/// assert_eq!(capsules.triangle_count(), 64);
/// # Ok::<(), bumper_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BumperMeshAssembler {
    config: BuilderConfig,
    buffers: MeshBuffers,
    report: RebuildReport,
}

impl BumperMeshAssembler {
    /// Creates an assembler with explicit settings.
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            buffers: MeshBuffers::new(),
            report: RebuildReport::default(),
        }
    }

    /// Returns the settings.
    #[inline]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Returns the buffers of the last rebuild.
    #[inline]
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Returns the report of the last rebuild.
    #[inline]
    pub fn report(&self) -> &RebuildReport {
        &self.report
    }

    /// Returns the submesh of one shape group from the last rebuild.
    pub fn submesh(&self, shape: ShapeType) -> Option<&SubMesh> {
        self.buffers.submeshes().iter().find(|s| s.shape == shape)
    }

    /// Upper bound on the vertices a rebuild of `graph` emits.
    pub fn vertex_estimate(&self, graph: &BumperGraph) -> usize {
        graph
            .bumpers()
            .iter()
            .map(|b| shapes::vertex_estimate(b.shape_type(), self.config.segments))
            .sum()
    }

    /// Rebuilds every buffer from the graph's current pose.
    ///
    /// Always records three submeshes (prysmoid, quad, capsuloid), empty
    /// groups included. Fails only when the vertex budget would be exceeded,
    /// in which case the previous buffers are left untouched.
    pub fn update(&mut self, graph: &BumperGraph) -> Result<&RebuildReport, MeshError> {
        let vertex_estimate = self.vertex_estimate(graph);
        if vertex_estimate > self.config.max_vertices {
            return Err(MeshError::TooManyVertices {
                count: vertex_estimate,
                max: self.config.max_vertices,
            });
        }
        let triangle_estimate: usize = graph
            .bumpers()
            .iter()
            .map(|b| shapes::triangle_estimate(b.shape_type(), self.config.segments))
            .sum();

        self.buffers.clear();
        self.report.clear();
        self.buffers.reserve(vertex_estimate, triangle_estimate);

        for shape in ShapeType::BUILD_ORDER {
            let index_offset = self.buffers.index_count();

            for (bumper_index, bumper) in graph.bumpers_of(shape) {
                let mut ctx = ShapeContext {
                    graph,
                    config: &self.config,
                    buffers: &mut self.buffers,
                    issues: &mut self.report.issues,
                    bumper: bumper_index,
                    shape,
                };
                shapes::build_bumper(&mut ctx, bumper);
                self.report.bumpers_built += 1;
            }

            let color = self.config.palette.color(shape);
            self.buffers.close_submesh(shape, index_offset, color);
        }

        debug!(
            "rebuilt {} bumpers: {} vertices, {} triangles, {} issues",
            self.report.bumpers_built,
            self.buffers.vertex_count(),
            self.buffers.triangle_count(),
            self.report.issues.len()
        );

        Ok(&self.report)
    }

    /// Applies a full pose to `graph`, then rebuilds.
    ///
    /// A pose the graph rejects (wrong sphere count, invalid sphere) fails
    /// with [`MeshError::Graph`] before anything changes, leaving both the
    /// graph and the buffers as they were.
    pub fn update_pose(
        &mut self,
        graph: &mut BumperGraph,
        pose: &[Sphere],
    ) -> Result<&RebuildReport, MeshError> {
        graph.set_pose(pose)?;
        self.update(graph)
    }
}

/// Builds the mesh of a graph in one shot with default settings.
pub fn build_bumper_mesh(graph: &BumperGraph) -> Result<(MeshBuffers, RebuildReport), MeshError> {
    let mut assembler = BumperMeshAssembler::default();
    assembler.update(graph)?;
    Ok((assembler.buffers, assembler.report))
}
