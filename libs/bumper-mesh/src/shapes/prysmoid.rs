//! # Prysmoid
//!
//! Three-sphere wedge: a flat-shaded cap triangle on each tangent plane and a
//! frustum along every edge `(S0,S1)`, `(S1,S2)`, `(S2,S0)`.

use super::ShapeContext;

/// Builds the top and bottom cap triangles of a prysmoid.
pub(crate) fn build_caps(ctx: &mut ShapeContext<'_>, indices: [usize; 3]) {
    if let Some((top, bottom)) = ctx.cap_planes(indices) {
        for plane in [top, bottom] {
            let positions = ctx.tangent_points(&plane, indices);
            ctx.buffers.append_triangle(positions, [plane.normal; 3]);
        }
    }
}
