//! Tests for the WASM-facing scene helpers.

use super::*;

const WEDGE_AND_CAPSULE: &str = r#"{
    "spheres": [
        { "center": [0.0, 0.0, 0.0], "radius": 1.0 },
        { "center": [2.0, 0.0, 0.0], "radius": 1.0 },
        { "center": [1.0, 2.0, 0.0], "radius": 1.0 },
        { "center": [6.0, 0.0, 0.0], "radius": 0.5 }
    ],
    "bumpers": [
        { "shape": "capsuloid", "spheres": [1, 3] },
        { "shape": "prysmoid", "spheres": [0, 1, 2] }
    ]
}"#;

fn scene() -> BumperScene {
    BumperScene::from_json_internal(WEDGE_AND_CAPSULE).expect("scene loads")
}

/// Loading a scene runs the first rebuild.
#[test]
fn from_json_builds_first_mesh() {
    let scene = scene();
    assert_eq!(scene.sphere_count(), 4);
    assert_eq!(scene.triangle_count(), 194 + 64);
    assert_eq!(scene.vertices().len(), scene.vertex_count() as usize * 6);
    assert_eq!(scene.indices().len(), scene.triangle_count() as usize * 3);
    assert_eq!(scene.issue_count(), 0);
}

#[test]
fn submesh_tables_cover_index_buffer() {
    let scene = scene();
    let offsets = scene.submesh_offsets();
    let counts = scene.submesh_counts();
    assert_eq!(offsets, vec![0, 194 * 3, 194 * 3]);
    assert_eq!(counts, vec![194 * 3, 0, 64 * 3]);
    assert_eq!(scene.submesh_colors().len(), 9);
    assert_eq!(&scene.submesh_colors()[6..], &[0.0, 0.0, 0.75]);
}

#[test]
fn rejects_wrong_sphere_count() {
    let json = r#"{
        "spheres": [{ "center": [0.0, 0.0, 0.0], "radius": 1.0 }],
        "bumpers": [{ "shape": "quad", "spheres": [0, 0, 0] }]
    }"#;
    let err = BumperScene::from_json_internal(json).unwrap_err();
    assert!(matches!(err, SceneError::Json(_)));
    assert!(err.to_string().contains("quad"));
}

#[test]
fn rejects_malformed_json() {
    let err = BumperScene::from_json_internal("{ spheres: ").unwrap_err();
    assert!(err.to_string().starts_with("invalid scene JSON"));
}

/// A pose change only shows up after `update`.
#[test]
fn set_sphere_then_update() {
    let mut scene = scene();
    let before = scene.vertices();

    scene.set_sphere_internal(3, 7.0, 1.0, 0.0, 0.6).unwrap();
    assert_eq!(scene.vertices(), before);

    let report = scene.update_internal().unwrap();
    assert!(report.is_clean());
    assert_ne!(scene.vertices(), before);
    assert_eq!(scene.vertices().len(), before.len());
}

#[test]
fn set_sphere_rejects_bad_input() {
    let mut scene = scene();
    let err = scene.set_sphere_internal(9, 0.0, 0.0, 0.0, 1.0).unwrap_err();
    assert!(matches!(
        err,
        SceneError::Graph(GraphError::NoSuchSphere { index: 9, sphere_count: 4 })
    ));

    let err = scene.set_sphere_internal(0, 0.0, 0.0, 0.0, -1.0).unwrap_err();
    assert!(matches!(err, SceneError::Graph(GraphError::InvalidSphere { index: 0, .. })));
}

#[test]
fn degenerate_pose_is_counted_not_fatal() {
    let mut scene = scene();
    // Swallow sphere 3 inside sphere 1.
    scene.set_sphere_internal(3, 2.2, 0.0, 0.0, 0.2).unwrap();
    scene.update_internal().unwrap();
    assert_eq!(scene.issue_count(), 1);
    assert_eq!(scene.submesh_counts()[2], 0);
}

#[test]
fn centroid_and_impostors() {
    let scene = scene();
    assert_eq!(scene.centroid(), vec![2.25, 0.5, 0.0]);

    let impostors = scene.sphere_impostors();
    assert_eq!(impostors.len(), 16);
    assert_eq!(&impostors[12..], &[6.0, 0.0, 0.0, 0.5]);
}

#[test]
fn impostor_quad_is_shared() {
    let scene = scene();
    let first = scene.impostor_quad() as *const ImpostorQuad;
    let second = scene.impostor_quad() as *const ImpostorQuad;
    assert_eq!(first, second);
    assert_eq!(scene.impostor_quad_indices(), vec![0, 1, 2, 2, 3, 0]);
    assert_eq!(scene.impostor_quad_vertices()[..2], [-1.0, 1.0]);
    assert_eq!(scene.impostor_quad_vertices().len(), 8);
}

#[test]
fn json_round_trip_keeps_pose() {
    let mut scene = scene();
    scene.set_sphere_internal(2, 1.0, 2.5, 0.5, 1.1).unwrap();
    let json = scene.to_json_internal().unwrap();

    let restored = BumperScene::from_json_internal(&json).unwrap();
    assert_eq!(restored.graph(), scene.graph());
}

#[test]
fn default_segments_match_config() {
    assert_eq!(default_segments(), FRUSTUM_SEGMENTS);
}
