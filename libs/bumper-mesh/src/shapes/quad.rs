//! # Quad
//!
//! Four-sphere wedge. Both cap planes are solved from `S0, S1, S2` only and
//! `S3` is offset along the same normal, which assumes the fourth sphere is
//! close to that tangent plane. When it is not, `V4` is still tangent to
//! `S3` but the cap fan is no longer planar. Each cap is the fan
//! `(V1,V2,V3), (V3,V4,V1)`; frustums run `(S0,S1), (S1,S2), (S2,S3), (S3,S0)`.

use super::ShapeContext;

/// Builds the top and bottom fan caps of a quad.
pub(crate) fn build_caps(ctx: &mut ShapeContext<'_>, indices: [usize; 4]) {
    let [i, j, k, _] = indices;

    if let Some((top, bottom)) = ctx.cap_planes([i, j, k]) {
        for plane in [top, bottom] {
            let first = ctx.buffers.vertex_count() as u32;
            for position in ctx.tangent_points(&plane, indices) {
                ctx.buffers.add_vertex(position, plane.normal);
            }
            ctx.buffers.add_triangle(first, first + 1, first + 2);
            ctx.buffers.add_triangle(first + 2, first + 3, first);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::build_single;
    use approx::assert_abs_diff_eq;
    use bumper_graph::{Bumper, Sphere};
    use glam::DVec3;

    fn square(lift: f64) -> Vec<Sphere> {
        vec![
            Sphere::new(DVec3::new(0.0, 0.0, 0.0), 1.0),
            Sphere::new(DVec3::new(4.0, 0.0, 0.0), 1.0),
            Sphere::new(DVec3::new(4.0, 4.0, 0.0), 1.0),
            Sphere::new(DVec3::new(0.0, 4.0, lift), 1.0),
        ]
    }

    #[test]
    fn test_quad_triangle_count() {
        let (buffers, issues) = build_single(square(0.0), Bumper::Quad([0, 1, 2, 3]));
        assert!(issues.is_empty());
        assert_eq!(buffers.triangle_count(), 4 + 4 * 64);
        assert!(buffers.validate());
    }

    #[test]
    fn test_quad_fan_layout() {
        let (buffers, _) = build_single(square(0.0), Bumper::Quad([0, 1, 2, 3]));
        let triangles: Vec<_> = buffers.triangles().take(4).collect();
        assert_eq!(triangles, vec![[0, 1, 2], [2, 3, 0], [4, 5, 6], [6, 7, 4]]);

        // Coplanar equal spheres: caps at z = ±1.
        for v in &buffers.vertices()[..4] {
            assert_abs_diff_eq!(v.position.z, 1.0, epsilon = 1.0e-9);
        }
        for v in &buffers.vertices()[4..8] {
            assert_abs_diff_eq!(v.position.z, -1.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn test_off_plane_fourth_sphere_still_tangent() {
        let spheres = square(1.5);
        let (buffers, issues) = build_single(spheres.clone(), Bumper::Quad([0, 1, 2, 3]));
        assert!(issues.is_empty());
        assert!(buffers.validate());

        let top = &buffers.vertices()[..4];
        for (v, sphere) in top.iter().zip(&spheres) {
            assert_abs_diff_eq!(v.position.distance(sphere.center), sphere.radius, epsilon = 1.0e-5);
        }
        // The plane ignores S3, so V4 sits off the cap plane.
        let offset = (top[3].position - top[0].position).dot(top[0].normal);
        assert_abs_diff_eq!(offset, 1.5, epsilon = 1.0e-9);
    }
}
