use approx::assert_abs_diff_eq;
use bumper_mesh::{
    Bumper, BumperGraph, BumperMeshAssembler, IssueKind, MeshError, ShapeType, Sphere,
};
use glam::DVec3;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sphere(x: f64, y: f64, z: f64, r: f64) -> Sphere {
    Sphere::new(DVec3::new(x, y, z), r)
}

#[test]
fn capsule_between_equal_spheres() {
    init_logging();
    let graph = BumperGraph::new(
        vec![sphere(0.0, 0.0, 0.0, 1.0), sphere(3.0, 0.0, 0.0, 1.0)],
        vec![Bumper::Capsuloid([0, 1])],
    )
    .unwrap();

    let mut assembler = BumperMeshAssembler::default();
    assert!(assembler.update(&graph).unwrap().is_clean());

    let buffers = assembler.buffers();
    assert_eq!(buffers.vertex_count(), 64);
    assert_eq!(buffers.triangle_count(), 64);
    for v in buffers.vertices() {
        let off_axis = DVec3::new(0.0, v.position.y, v.position.z);
        assert_abs_diff_eq!(off_axis.length(), 1.0, epsilon = 1.0e-9);
        assert!(v.position.x.abs() < 1.0e-9 || (v.position.x - 3.0).abs() < 1.0e-9);
        assert_abs_diff_eq!(v.normal.x, 0.0, epsilon = 1.0e-12);
    }

    let (min, max) = buffers.bounding_box();
    assert_abs_diff_eq!(min.x, 0.0, epsilon = 1.0e-9);
    assert_abs_diff_eq!(max.x, 3.0, epsilon = 1.0e-9);
}

#[test]
fn prysmoid_over_touching_unit_spheres() {
    init_logging();
    let graph = BumperGraph::new(
        vec![
            sphere(0.0, 0.0, 0.0, 1.0),
            sphere(2.0, 0.0, 0.0, 1.0),
            sphere(1.0, 3.0_f64.sqrt(), 0.0, 1.0),
        ],
        vec![Bumper::Prysmoid([0, 1, 2])],
    )
    .unwrap();

    let mut assembler = BumperMeshAssembler::default();
    assert!(assembler.update(&graph).unwrap().is_clean());

    let prysmoids = assembler.submesh(ShapeType::Prysmoid).unwrap();
    assert_eq!(prysmoids.triangle_count(), 194);

    let caps = &assembler.buffers().vertices()[..6];
    for v in &caps[..3] {
        assert_abs_diff_eq!(v.position.z, 1.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(v.normal.z, 1.0, epsilon = 1.0e-12);
    }
    for v in &caps[3..] {
        assert_abs_diff_eq!(v.position.z, -1.0, epsilon = 1.0e-9);
        assert_abs_diff_eq!(v.normal.z, -1.0, epsilon = 1.0e-12);
    }
}

#[test]
fn quad_with_mixed_radii() {
    init_logging();
    let graph = BumperGraph::new(
        vec![
            sphere(0.0, 0.0, 0.0, 1.0),
            sphere(6.0, 0.0, 0.0, 1.3),
            sphere(6.0, 5.0, 0.4, 1.1),
            sphere(0.0, 5.0, 0.2, 0.9),
        ],
        vec![Bumper::Quad([0, 1, 2, 3])],
    )
    .unwrap();

    let mut assembler = BumperMeshAssembler::default();
    let report = assembler.update(&graph).unwrap();
    assert_eq!(report.degenerate_frustums(), 0);
    assert_eq!(report.degenerate_caps(), 0);

    let buffers = assembler.buffers();
    assert!(buffers.validate());
    assert_eq!(buffers.triangle_count(), 4 + 4 * 64);

    let spheres = graph.spheres();
    for v in &buffers.vertices()[..4] {
        let nearest = spheres
            .iter()
            .map(|s| (v.position.distance(s.center) - s.radius).abs())
            .fold(f64::INFINITY, f64::min);
        assert!(nearest < 1.0e-5, "cap vertex off every sphere: {nearest}");
    }
}

#[test]
fn mixed_graph_gpu_buffers() {
    init_logging();
    let graph = BumperGraph::new(
        vec![
            sphere(0.0, 0.0, 0.0, 1.0),
            sphere(4.0, 0.0, 0.0, 1.0),
            sphere(2.0, 3.0, 0.0, 1.0),
            sphere(8.0, 0.0, 0.0, 0.5),
        ],
        vec![
            Bumper::Prysmoid([0, 1, 2]),
            Bumper::Capsuloid([1, 3]),
        ],
    )
    .unwrap();

    let mut assembler = BumperMeshAssembler::default();
    assembler.update(&graph).unwrap();
    let buffers = assembler.buffers();

    assert_eq!(buffers.vertices_f32().len(), buffers.vertex_count() * 6);
    assert_eq!(buffers.positions_f32().len(), buffers.vertex_count() * 3);
    assert_eq!(buffers.normals_f32().len(), buffers.vertex_count() * 3);

    let quads = assembler.submesh(ShapeType::Quad).unwrap();
    assert!(quads.is_empty());
    let capsules = assembler.submesh(ShapeType::Capsuloid).unwrap();
    assert_eq!(capsules.index_offset, 194 * 3);
    assert_eq!(capsules.index_count, 64 * 3);
}

#[test]
fn contained_sphere_leaves_gap() {
    init_logging();
    let graph = BumperGraph::new(
        vec![
            sphere(0.0, 0.0, 0.0, 2.0),
            sphere(0.5, 0.0, 0.0, 0.5),
            sphere(0.0, 5.0, 0.0, 1.0),
        ],
        vec![Bumper::Prysmoid([0, 1, 2])],
    )
    .unwrap();

    let mut assembler = BumperMeshAssembler::default();
    let report = assembler.update(&graph).unwrap();
    assert_eq!(report.degenerate_frustums(), 1);
    assert!(report.issues.iter().any(|issue| matches!(
        issue.kind,
        IssueKind::DegenerateFrustum { spheres: (0, 1), .. }
    )));
    assert_eq!(report.degenerate_caps(), 0);
    // Caps and the two remaining frustums are still emitted.
    assert_eq!(assembler.buffers().triangle_count(), 2 + 2 * 64);
}

#[test]
fn vertex_budget_rejects_rebuild() {
    let graph = BumperGraph::new(
        vec![sphere(0.0, 0.0, 0.0, 1.0), sphere(3.0, 0.0, 0.0, 1.0)],
        vec![Bumper::Capsuloid([0, 1])],
    )
    .unwrap();
    let config = bumper_mesh::config::BuilderConfig::default().with_max_vertices(10);
    let mut assembler = BumperMeshAssembler::new(config);
    match assembler.update(&graph) {
        Err(MeshError::TooManyVertices { count, max }) => {
            assert_eq!(count, 64);
            assert_eq!(max, 10);
        }
        other => panic!("expected vertex budget error, got {other:?}"),
    }
}

#[test]
fn repeated_updates_are_stable() {
    let mut graph = BumperGraph::new(
        vec![
            sphere(0.0, 0.0, 0.0, 1.0),
            sphere(2.0, 0.0, 0.0, 1.0),
            sphere(1.0, 2.0, 0.0, 1.0),
        ],
        vec![Bumper::Prysmoid([0, 1, 2])],
    )
    .unwrap();

    let mut assembler = BumperMeshAssembler::default();
    assembler.update(&graph).unwrap();
    let first = assembler.buffers().clone();

    graph.set_sphere(2, sphere(1.0, 2.5, 0.3, 1.0)).unwrap();
    assembler.update(&graph).unwrap();
    assert_ne!(assembler.buffers(), &first);

    graph.set_sphere(2, sphere(1.0, 2.0, 0.0, 1.0)).unwrap();
    assembler.update(&graph).unwrap();
    assert_eq!(assembler.buffers(), &first);
}
