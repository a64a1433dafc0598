//! # Tangent Plane Solver
//!
//! Finds the cap plane of a three-sphere wedge.
//!
//! For spheres of equal radius the plane through the three centers, pushed
//! out by the radius, is already tangent to all three. With unequal radii the
//! tangent points move as the normal tilts, so the normal is found as a fixed
//! point of
//!
//! ```text
//! n ↦ normalize(side · (p_b − p_a) × (p_c − p_a)),   p_i = c_i + r_i · n
//! ```
//!
//! seeded with the normal of the center triangle. The iteration returns early
//! when a step is parallel to the previous normal AND points into the
//! hemisphere opposite the seed ([`SolveStatus::Flipped`]), or when a step
//! reproduces the normal exactly. Otherwise it runs the full budget and
//! returns the last candidate.

use bumper_graph::Sphere;
use config::constants::{TANGENT_SOLVER_MAX_ITERATIONS, TANGENT_SOLVER_PARALLEL_DOT};
use glam::DVec3;

use crate::error::MeshError;

/// Which of the two opposing cap planes to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Along the right-handed normal of the center triangle.
    Top,
    /// Against it.
    Bottom,
}

impl Side {
    /// Returns `+1.0` for [`Side::Top`] and `-1.0` for [`Side::Bottom`].
    #[inline]
    pub const fn sign(self) -> f64 {
        match self {
            Side::Top => 1.0,
            Side::Bottom => -1.0,
        }
    }
}

/// How the solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// A step was parallel to the previous normal and flipped away from the seed.
    Flipped,
    /// The budget ran out (or the normal stopped changing) while steps stayed parallel.
    Settled,
    /// The budget ran out while the normal was still moving, or the offset
    /// triangle collapsed.
    Exhausted,
}

/// Result of a tangent plane solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPlane {
    /// Unit normal of the cap plane.
    pub normal: DVec3,
    /// How the iteration ended.
    pub status: SolveStatus,
    /// Iterations performed.
    pub iterations: u32,
}

impl TangentPlane {
    /// Returns false only when the solve is a best-effort fallback.
    #[inline]
    pub fn converged(&self) -> bool {
        self.status != SolveStatus::Exhausted
    }

    /// Tangent point of the plane on `sphere`.
    #[inline]
    pub fn tangent_point(&self, sphere: &Sphere) -> DVec3 {
        sphere.offset_along(self.normal)
    }
}

/// Fixed-point tangent plane solver.
///
/// # Example
///
/// ```rust
/// use bumper_graph::Sphere;
/// use bumper_mesh::solver::{Side, TangentPlaneSolver};
/// use glam::DVec3;
///
/// let a = Sphere::new(DVec3::new(0.0, 0.0, 0.0), 1.0);
/// let b = Sphere::new(DVec3::new(4.0, 0.0, 0.0), 1.0);
/// let c = Sphere::new(DVec3::new(0.0, 4.0, 0.0), 1.0);
///
/// let top = TangentPlaneSolver::default().solve(&a, &b, &c, Side::Top)?;
/// assert!(top.converged());
/// assert!((top.normal - DVec3::Z).length() < 1.0e-9);
/// # Ok::<(), bumper_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPlaneSolver {
    /// Iteration budget.
    pub max_iterations: u32,
    /// Minimum dot product between successive normals to call them parallel.
    pub parallel_dot: f64,
}

impl Default for TangentPlaneSolver {
    fn default() -> Self {
        Self {
            max_iterations: TANGENT_SOLVER_MAX_ITERATIONS,
            parallel_dot: TANGENT_SOLVER_PARALLEL_DOT,
        }
    }
}

impl TangentPlaneSolver {
    /// Solves the cap plane of `side` over three spheres.
    ///
    /// Fails with [`MeshError::DegenerateGeometry`] when the centers are
    /// collinear (or coincide), since no seed normal exists. Non-convergence
    /// is not an error: the last candidate is returned with
    /// [`SolveStatus::Exhausted`].
    pub fn solve(
        &self,
        a: &Sphere,
        b: &Sphere,
        c: &Sphere,
        side: Side,
    ) -> Result<TangentPlane, MeshError> {
        let sign = side.sign();
        let seed = (b.center - a.center)
            .cross(c.center - a.center)
            .try_normalize()
            .ok_or_else(|| {
                MeshError::degenerate(format!(
                    "tangent plane undefined for collinear centers {}, {}, {}",
                    a.center, b.center, c.center
                ))
            })?;

        let start = seed * sign;
        let mut normal = start;
        let mut parallel = false;

        for iteration in 1..=self.max_iterations {
            let pa = a.offset_along(normal);
            let pb = b.offset_along(normal);
            let pc = c.offset_along(normal);

            let Some(candidate) = ((pb - pa).cross(pc - pa) * sign).try_normalize() else {
                return Ok(TangentPlane {
                    normal,
                    status: SolveStatus::Exhausted,
                    iterations: iteration,
                });
            };

            parallel = normal.dot(candidate) >= self.parallel_dot;
            if parallel && start.dot(candidate) < 0.0 {
                return Ok(TangentPlane {
                    normal: candidate,
                    status: SolveStatus::Flipped,
                    iterations: iteration,
                });
            }

            // Exact fixed point: every further iteration reproduces it.
            if candidate == normal {
                return Ok(TangentPlane {
                    normal,
                    status: SolveStatus::Settled,
                    iterations: iteration,
                });
            }

            normal = candidate;
        }

        Ok(TangentPlane {
            normal,
            status: if parallel {
                SolveStatus::Settled
            } else {
                SolveStatus::Exhausted
            },
            iterations: self.max_iterations,
        })
    }

    /// Solves both cap planes: `(top, bottom)`.
    pub fn solve_caps(
        &self,
        a: &Sphere,
        b: &Sphere,
        c: &Sphere,
    ) -> Result<(TangentPlane, TangentPlane), MeshError> {
        Ok((
            self.solve(a, b, c, Side::Top)?,
            self.solve(a, b, c, Side::Bottom)?,
        ))
    }
}

/// Solves one cap plane with the default budget.
///
/// Shorthand for `TangentPlaneSolver::default().solve(a, b, c, side)`.
pub fn solve_tangent_plane(
    a: &Sphere,
    b: &Sphere,
    c: &Sphere,
    side: Side,
) -> Result<TangentPlane, MeshError> {
    TangentPlaneSolver::default().solve(a, b, c, side)
}
