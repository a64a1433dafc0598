//! # Mesh Buffers
//!
//! One vertex buffer and one triangle-index buffer shared by every shape
//! builder, partitioned into per-shape submeshes.

use std::ops::Range;

use bumper_graph::ShapeType;
use glam::DVec3;

use crate::material::Material;

/// A mesh vertex: position and normal, nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: DVec3,
    pub normal: DVec3,
}

impl Vertex {
    /// Number of `f32` values one vertex occupies in [`MeshBuffers::vertices_f32`].
    pub const STRIDE: usize = 6;

    /// Creates a vertex.
    pub const fn new(position: DVec3, normal: DVec3) -> Self {
        Self { position, normal }
    }
}

/// A contiguous slice of the index buffer drawn with one material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubMesh {
    /// Shape group that produced the range.
    pub shape: ShapeType,
    /// First index of the range.
    pub index_offset: usize,
    /// Number of indices in the range (a multiple of 3).
    pub index_count: usize,
    /// Group color, RGB in [0, 1].
    pub color: [f32; 3],
}

impl SubMesh {
    /// Returns the covered index range.
    #[inline]
    pub fn index_range(&self) -> Range<usize> {
        self.index_offset..self.index_offset + self.index_count
    }

    /// Returns the number of triangles in the range.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.index_count / 3
    }

    /// Returns true if the group emitted nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index_count == 0
    }

    /// Returns the material the renderer should bind for this range.
    pub fn material(&self) -> Material {
        Material::bumper(self.color)
    }
}

/// Vertex, index and submesh buffers of one rebuild.
///
/// Vertices are stored in emission order and never deduplicated across
/// builders. All geometry is kept in f64; export to f32 only happens in the
/// `*_f32` accessors used for GPU upload.
///
/// # Example
///
/// ```rust
/// use bumper_mesh::MeshBuffers;
/// use glam::DVec3;
///
/// let mut buffers = MeshBuffers::new();
/// buffers.append_triangle(
///     [DVec3::ZERO, DVec3::X, DVec3::Y],
///     [DVec3::Z; 3],
/// );
/// assert_eq!(buffers.vertex_count(), 3);
/// assert_eq!(buffers.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    submeshes: Vec<SubMesh>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every buffer, keeping allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.submeshes.clear();
    }

    /// Reserves room for additional vertices and triangles.
    pub fn reserve(&mut self, vertex_count: usize, triangle_count: usize) {
        self.vertices.reserve(vertex_count);
        self.indices.reserve(triangle_count * 3);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if no vertex has been emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(position, normal));
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Adds three fresh vertices and the triangle joining them.
    pub fn append_triangle(&mut self, positions: [DVec3; 3], normals: [DVec3; 3]) {
        let v0 = self.add_vertex(positions[0], normals[0]);
        let v1 = self.add_vertex(positions[1], normals[1]);
        let v2 = self.add_vertex(positions[2], normals[2]);
        self.add_triangle(v0, v1, v2);
    }

    /// Records a submesh covering every index emitted since `index_offset`.
    pub(crate) fn close_submesh(&mut self, shape: ShapeType, index_offset: usize, color: [f32; 3]) {
        self.submeshes.push(SubMesh {
            shape,
            index_offset,
            index_count: self.indices.len() - index_offset,
            color,
        });
    }

    /// Returns the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the flat triangle index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the submeshes in build order.
    #[inline]
    pub fn submeshes(&self) -> &[SubMesh] {
        &self.submeshes
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Iterates the triangles of one submesh.
    pub fn submesh_triangles<'a>(&'a self, submesh: &SubMesh) -> impl Iterator<Item = [u32; 3]> + 'a {
        self.indices[submesh.index_range()]
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.vertices[1..]
            .iter()
            .fold((first.position, first.position), |(min, max), v| {
                (min.min(v.position), max.max(v.position))
            })
    }

    /// Validates the buffers for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - All positions and normals are finite
    /// - Submeshes are contiguous, triangle-aligned and in bounds
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        if self.indices.len() % 3 != 0 || self.indices.iter().any(|&i| i >= vertex_count) {
            return false;
        }

        if self
            .vertices
            .iter()
            .any(|v| !v.position.is_finite() || !v.normal.is_finite())
        {
            return false;
        }

        let mut expected_offset = self.submeshes.first().map_or(0, |s| s.index_offset);
        for submesh in &self.submeshes {
            if submesh.index_offset != expected_offset || submesh.index_count % 3 != 0 {
                return false;
            }
            expected_offset = submesh.index_range().end;
        }

        expected_offset <= self.indices.len()
    }

    /// Exports interleaved vertices for the GPU.
    ///
    /// Returns `[px, py, pz, nx, ny, nz, ...]` with [`Vertex::STRIDE`] floats per vertex.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * Vertex::STRIDE);
        for v in &self.vertices {
            result.extend_from_slice(&v.position.as_vec3().to_array());
            result.extend_from_slice(&v.normal.as_vec3().to_array());
        }
        result
    }

    /// Exports positions as a flattened f32 array.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.position.as_vec3().to_array())
            .collect()
    }

    /// Exports normals as a flattened f32 array.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.normal.as_vec3().to_array())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_buffers() -> MeshBuffers {
        let mut buffers = MeshBuffers::new();
        buffers.append_triangle([DVec3::ZERO, DVec3::X, DVec3::Y], [DVec3::Z; 3]);
        buffers
    }

    #[test]
    fn test_buffers_new() {
        let buffers = MeshBuffers::new();
        assert!(buffers.is_empty());
        assert_eq!(buffers.vertex_count(), 0);
        assert_eq!(buffers.triangle_count(), 0);
        assert!(buffers.validate());
    }

    #[test]
    fn test_append_triangle_emits_fresh_vertices() {
        let mut buffers = triangle_buffers();
        buffers.append_triangle([DVec3::ZERO, DVec3::X, DVec3::Y], [DVec3::Z; 3]);
        assert_eq!(buffers.vertex_count(), 6);
        assert_eq!(buffers.indices(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_close_submesh_spans_new_indices() {
        let mut buffers = triangle_buffers();
        let offset = buffers.index_count();
        buffers.append_triangle([DVec3::ZERO, DVec3::X, DVec3::Z], [DVec3::Y; 3]);
        buffers.close_submesh(ShapeType::Quad, offset, [1.0, 0.0, 0.0]);

        let submesh = buffers.submeshes()[0];
        assert_eq!(submesh.index_range(), 3..6);
        assert_eq!(submesh.triangle_count(), 1);
        assert_eq!(buffers.submesh_triangles(&submesh).collect::<Vec<_>>(), vec![[3, 4, 5]]);
    }

    #[test]
    fn test_validate_invalid_index() {
        let mut buffers = MeshBuffers::new();
        buffers.add_vertex(DVec3::ZERO, DVec3::Z);
        buffers.add_triangle(0, 1, 2);
        assert!(!buffers.validate());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut buffers = MeshBuffers::new();
        buffers.append_triangle(
            [DVec3::ZERO, DVec3::X, DVec3::Y],
            [DVec3::Z, DVec3::Z, DVec3::splat(f64::NAN)],
        );
        assert!(!buffers.validate());
    }

    #[test]
    fn test_validate_rejects_gap_between_submeshes() {
        let mut buffers = triangle_buffers();
        buffers.append_triangle([DVec3::ZERO, DVec3::X, DVec3::Y], [DVec3::Z; 3]);
        buffers.close_submesh(ShapeType::Prysmoid, 0, [0.0; 3]);
        buffers.submeshes.push(SubMesh {
            shape: ShapeType::Quad,
            index_offset: 3,
            index_count: 3,
            color: [0.0; 3],
        });
        assert!(!buffers.validate());
    }

    #[test]
    fn test_vertices_f32_interleaves() {
        let mut buffers = MeshBuffers::new();
        buffers.add_vertex(DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.0, 0.0, 1.0));
        assert_eq!(buffers.vertices_f32(), vec![1.0f32, 2.0, 3.0, 0.0, 0.0, 1.0]);
        assert_eq!(buffers.positions_f32(), vec![1.0f32, 2.0, 3.0]);
        assert_eq!(buffers.normals_f32(), vec![0.0f32, 0.0, 1.0]);
    }

    #[test]
    fn test_bounding_box() {
        let mut buffers = MeshBuffers::new();
        buffers.add_vertex(DVec3::new(-1.0, -2.0, -3.0), DVec3::Z);
        buffers.add_vertex(DVec3::new(4.0, 5.0, 6.0), DVec3::Z);
        let (min, max) = buffers.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_clear_keeps_nothing() {
        let mut buffers = triangle_buffers();
        buffers.close_submesh(ShapeType::Capsuloid, 0, [0.0; 3]);
        buffers.clear();
        assert!(buffers.is_empty());
        assert!(buffers.indices().is_empty());
        assert!(buffers.submeshes().is_empty());
    }
}
