//! # Capsule Frustum
//!
//! The lateral surface of the cone tangent to two spheres.
//!
//! For spheres with radii `r_small ≤ r_large` whose centers are `d` apart,
//! the common external tangent cone touches each sphere along a circle. With
//! slant length `l = sqrt(d² − (r_large − r_small)²)`:
//!
//! ```text
//! circle radius  ρ_i = r_i · l / d
//! circle offset  t_i = (r_large − r_small) · r_i / d   (toward the small sphere)
//! ```
//!
//! Both circles are sampled at the same angles and stitched into a closed
//! ring strip of `2 · segments` triangles. The ring vertices are shared by
//! the triangles of neighbouring segments, so a frustum adds `2 · segments`
//! vertices rather than three fresh vertices per triangle. Vertex normals
//! are radial, ignoring the cone slant (see [`TangentFrustum::radial`]).

use std::f64::consts::TAU;

use bumper_graph::Sphere;
use config::constants::{EPSILON_TOLERANCE, FRUSTUM_SEGMENTS, HELPER_AXIS_SWITCH};
use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::MeshBuffers;

/// A circle along which the frustum touches a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentCircle {
    pub center: DVec3,
    pub radius: f64,
}

/// Truncated cone tangent to two spheres.
///
/// # Example
///
/// ```rust
/// use bumper_graph::Sphere;
/// use bumper_mesh::frustum::TangentFrustum;
/// use glam::DVec3;
///
/// let a = Sphere::new(DVec3::ZERO, 1.0);
/// let b = Sphere::new(DVec3::new(3.0, 0.0, 0.0), 1.0);
/// let frustum = TangentFrustum::between(&a, &b, 1.0e-9)?;
///
/// // Equal radii: a cylinder whose circles pass through the centers
/// assert_eq!(frustum.small.center, a.center);
/// assert_eq!(frustum.large.center, b.center);
/// assert!((frustum.small.radius - 1.0).abs() < 1.0e-12);
/// # Ok::<(), bumper_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentFrustum {
    /// Tangent circle on the smaller sphere (the first one on ties).
    pub small: TangentCircle,
    /// Tangent circle on the larger sphere.
    pub large: TangentCircle,
    /// Unit axis pointing from the larger sphere toward the smaller one.
    pub axis: DVec3,
    right: DVec3,
    up: DVec3,
}

impl TangentFrustum {
    /// Computes the tangent frustum between two spheres.
    ///
    /// Fails with [`MeshError::DegenerateGeometry`] when the centers coincide
    /// or when one sphere reaches past the other along the axis so that the
    /// slant radicand `d² − Δr²` is not above `tolerance`.
    pub fn between(a: &Sphere, b: &Sphere, tolerance: f64) -> Result<Self, MeshError> {
        let (small, large) = if b.radius < a.radius { (b, a) } else { (a, b) };

        let d = small.center - large.center;
        let d_length = d.length();
        if d_length <= tolerance {
            return Err(MeshError::degenerate(format!(
                "frustum between coincident centers {} and {}",
                small.center, large.center
            )));
        }

        let delta = large.radius - small.radius;
        let radicand = d_length * d_length - delta * delta;
        if radicand <= tolerance {
            return Err(MeshError::degenerate(format!(
                "sphere of radius {} contains sphere of radius {} ({} apart), no tangent cone",
                large.radius, small.radius, d_length
            )));
        }

        let slant = radicand.sqrt();
        let axis = d / d_length;
        let circle = |sphere: &Sphere| TangentCircle {
            center: sphere.center + axis * (delta * sphere.radius / d_length),
            radius: sphere.radius * (slant / d_length),
        };

        let helper = if axis.x.abs() < HELPER_AXIS_SWITCH {
            DVec3::X
        } else {
            DVec3::Y
        };
        let right = axis.cross(helper).normalize();
        let up = right.cross(axis).normalize();

        Ok(Self {
            small: circle(small),
            large: circle(large),
            axis,
            right,
            up,
        })
    }

    /// Unit direction from the axis toward ring sample `theta`.
    ///
    /// Also used as the vertex normal: the lateral surface is shaded as a
    /// cylinder, ignoring the cone slant.
    #[inline]
    pub fn radial(&self, theta: f64) -> DVec3 {
        self.right * theta.cos() + self.up * theta.sin()
    }

    /// Appends the ring strip to `buffers`.
    ///
    /// Emits `2 · segments` vertices (small ring first) and `2 · segments`
    /// triangles.
    pub fn emit(&self, buffers: &mut MeshBuffers, segments: u32) {
        let first = buffers.vertex_count() as u32;

        for circle in [&self.small, &self.large] {
            for i in 0..segments {
                let direction = self.radial(TAU * i as f64 / segments as f64);
                buffers.add_vertex(circle.center + direction * circle.radius, direction);
            }
        }

        for i in 0..segments {
            let next = (i + 1) % segments;
            let small_i = first + i;
            let small_next = first + next;
            let large_i = first + segments + i;
            let large_next = first + segments + next;

            buffers.add_triangle(small_i, large_i, small_next);
            buffers.add_triangle(large_i, large_next, small_next);
        }
    }
}

/// Builds the frustum between two spheres into `buffers`.
///
/// On error nothing is emitted.
///
/// # Example
///
/// ```rust
/// use bumper_graph::Sphere;
/// use bumper_mesh::{frustum::build_frustum, MeshBuffers};
/// use glam::DVec3;
///
/// let mut buffers = MeshBuffers::new();
/// let a = Sphere::new(DVec3::ZERO, 0.5);
/// let b = Sphere::new(DVec3::new(0.0, 2.0, 0.0), 1.0);
/// build_frustum(&mut buffers, &a, &b, 16, 1.0e-9)?;
/// assert_eq!(buffers.triangle_count(), 32);
///
/// let inner = Sphere::new(DVec3::new(0.0, 2.1, 0.0), 0.2);
/// assert!(build_frustum(&mut buffers, &inner, &b, 16, 1.0e-9).is_err());
/// assert_eq!(buffers.triangle_count(), 32);
/// # Ok::<(), bumper_mesh::MeshError>(())
/// ```
pub fn build_frustum(
    buffers: &mut MeshBuffers,
    a: &Sphere,
    b: &Sphere,
    segments: u32,
    tolerance: f64,
) -> Result<TangentFrustum, MeshError> {
    let frustum = TangentFrustum::between(a, b, tolerance)?;
    frustum.emit(buffers, segments);
    Ok(frustum)
}

/// Builds a frustum with the default segment count and tolerance.
pub fn build_default_frustum(
    buffers: &mut MeshBuffers,
    a: &Sphere,
    b: &Sphere,
) -> Result<TangentFrustum, MeshError> {
    build_frustum(buffers, a, b, FRUSTUM_SEGMENTS, EPSILON_TOLERANCE)
}
