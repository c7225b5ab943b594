use nalgebra::Point3;

use super::*;
use crate::scene::Scene;

#[test]
fn counts_only_mesh_geometry() {
    let objects = vec![
        SceneObject::mesh("a_geo", &[Point3::origin(), Point3::new(1.0, 0.0, 0.0)], 10),
        SceneObject::other("Light"),
        SceneObject::mesh("b_geo", &[Point3::origin()], 5),
    ];

    let stats = SceneStats::from_objects(&objects);

    assert_eq!(stats.total_objects, 3);
    assert_eq!(stats.mesh_objects, 2);
    assert_eq!(stats.total_faces, 15);
    assert_eq!(stats.total_vertices, 3);
    assert_eq!(stats.summary(), "Scene: 2 mesh objects, 15 total faces");
}

#[test]
fn corrupt_mesh_counts_as_object_without_geometry() {
    let objects = vec![SceneObject::mesh("x", &[], 4).with_mesh(None)];

    let stats = SceneStats::from_objects(&objects);

    assert_eq!(stats.mesh_objects, 1);
    assert_eq!(stats.total_faces, 0);
}

#[test]
fn empty_scene_is_all_zero() {
    assert_eq!(SceneStats::from_objects(&[]), SceneStats::default());
}

#[test]
fn face_total_saturates_instead_of_overflowing() {
    let json = format!(
        r#"{{"objects": [
            {{"name": "a_geo", "kind": "mesh", "mesh": {{"polygon_count": {}, "vertices": []}}}},
            {{"name": "b_geo", "kind": "mesh", "mesh": {{"polygon_count": 1, "vertices": []}}}}
        ]}}"#,
        usize::MAX
    );
    let scene = Scene::from_json(&json).unwrap();

    let stats = SceneStats::from_objects(&scene.objects);

    assert_eq!(stats.mesh_objects, 2);
    assert_eq!(stats.total_faces, usize::MAX);
    assert_eq!(
        stats.summary(),
        format!("Scene: 2 mesh objects, {} total faces", usize::MAX)
    );
}
