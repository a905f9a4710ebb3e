use std::path::PathBuf;

use ov3d_core::{
    load_scene, render, Camera, CameraConfig, FitError, MaterialWarning, RenderError, Rgb,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cube_with_material() {
    let load = load_scene(fixture("cube.obj")).unwrap();
    assert!(load.warnings.is_empty());

    let scene = load.scene;
    assert_eq!(scene.vertices.len(), 8);
    assert_eq!(scene.faces.len(), 6);
    assert!(scene.faces.iter().all(|f| f.indices.len() == 4));
    assert_eq!(scene.materials.len(), 1);
    assert_eq!(scene.materials["red"], Rgb::new(255, 0, 0));
}

#[test]
fn test_cube_renders_back_to_front() {
    let scene = load_scene(fixture("cube.obj")).unwrap().scene;
    let mut camera = Camera::new(CameraConfig::default());
    camera.fit_to(&scene.vertices).unwrap();

    assert!(camera.shift.norm() < 1e-12);
    assert_eq!(camera.scale, 300.0);

    let items = render(&scene, &camera).unwrap();
    assert_eq!(items.len(), 6);
    assert!(items.iter().all(|i| i.color == Rgb::new(255, 0, 0)));
    assert!(items.windows(2).all(|w| w[0].depth >= w[1].depth));
    for item in &items {
        for p in &item.points {
            assert!(p.x >= 0.0 && p.x <= 800.0);
            assert!(p.y >= 0.0 && p.y <= 600.0);
        }
    }
}

#[test]
fn test_kd_truncates() {
    let scene = load_scene(fixture("near_white.obj")).unwrap().scene;
    assert_eq!(scene.materials["pale"], Rgb::new(254, 254, 254));
}

#[test]
fn test_later_mtllib_replaces_materials() {
    let scene = load_scene(fixture("two_libraries.obj")).unwrap().scene;

    assert_eq!(scene.materials.len(), 1);
    assert_eq!(scene.materials["beta"], Rgb::new(255, 255, 0));
    assert!(!scene.materials.contains_key("alpha"));
    assert!(!scene.materials.contains_key("shared"));

    // The first face still names `alpha`, which no longer resolves
    let camera = Camera::default();
    let items = render(&scene, &camera).unwrap();
    let color_of = |face: usize| items.iter().find(|i| i.face == face).unwrap().color;
    assert_eq!(color_of(0), Rgb::UNRESOLVED);
    assert_eq!(color_of(1), Rgb::new(255, 255, 0));
}

#[test]
fn test_missing_library_keeps_previous_materials() {
    let load = load_scene(fixture("missing_library.obj")).unwrap();

    assert_eq!(load.warnings.len(), 1);
    match &load.warnings[0] {
        MaterialWarning::Unreadable { path, .. } => assert!(path.ends_with("absent.mtl")),
        other => panic!("unexpected warning {other:?}"),
    }
    assert_eq!(load.scene.materials["red"], Rgb::new(255, 0, 0));
}

#[test]
fn test_out_of_range_face_fails_render() {
    let scene = load_scene(fixture("bad_index.obj")).unwrap().scene;
    let mut camera = Camera::default();
    camera.fit_to(&scene.vertices).unwrap();

    assert_eq!(
        render(&scene, &camera),
        Err(RenderError::VertexIndexOutOfRange {
            face: 1,
            index: 8,
            vertex_count: 3,
        })
    );
}

#[test]
fn test_single_point_model_fails_fit() {
    let scene = load_scene(fixture("lone_point.obj")).unwrap().scene;
    let mut camera = Camera::default();
    let before = camera.clone();

    assert_eq!(camera.fit_to(&scene.vertices), Err(FitError::ZeroExtent));
    assert_eq!(camera, before);
}
