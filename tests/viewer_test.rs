use flow_rig::{
    Vector3,
    data_structures::scene_graph::{SceneGraph, SceneNode},
    gui::ControlId,
    naming::session::FEATURES_FOLDER,
    viewer::{ModelEntry, Viewer, ViewerConfig, init_logger},
};

mod common;
use common::test_utils::{arm_rig, assert_vec_close, position_of};

#[tokio::test]
async fn should_switch_between_catalogue_models() {
    init_logger();
    let mut viewer = Viewer::default();

    let summary = viewer.switch_model("hinge").await.expect("hinge should load");
    assert_eq!(viewer.current_model(), Some("hinge"));
    assert_eq!(summary.controls, 2);
    let scene = viewer.scene().unwrap();
    assert_vec_close(position_of(scene, "Attached_tip"), [2.0, 0.0, 0.0]);
    assert_vec_close(position_of(scene, "Attached_lid"), [0.0, 1.0, 0.0]);
    let hinge_controls: Vec<ControlId> = viewer
        .session()
        .controls()
        .iter()
        .map(|control| control.handle())
        .collect();

    let summary = viewer.switch_model("lamp").await.expect("lamp should load");
    assert_eq!(viewer.current_model(), Some("lamp"));
    assert_eq!(summary.controls, 1);
    assert_eq!(viewer.panel().folders().len(), 2);
    for control in hinge_controls {
        assert!(viewer.panel().widget(control).is_none());
        assert!(viewer.session().control(control).is_none());
    }
    assert_vec_close(position_of(viewer.scene().unwrap(), "Attached_head"), [0.0, -3.0, 2.0]);
}

#[tokio::test]
async fn should_move_attachments_through_panel_sliders() {
    let mut viewer = Viewer::default();
    viewer.switch_model("hinge").await.unwrap();

    let sliders: Vec<(String, ControlId)> = viewer
        .panel()
        .find_folder(FEATURES_FOLDER)
        .unwrap()
        .widgets
        .iter()
        .map(|widget| (widget.label.clone(), widget.id))
        .collect();
    let arm = sliders.iter().find(|(label, _)| label == "Arm X Scale").unwrap().1;
    let lid = sliders.iter().find(|(label, _)| label == "Lid Z Rotate").unwrap().1;

    assert_eq!(viewer.on_slider(arm, 3.0), Some(3.0));
    assert_vec_close(position_of(viewer.scene().unwrap(), "Attached_tip"), [3.0, 0.0, 0.0]);
    assert_eq!(viewer.panel().widget(arm).unwrap().value, 3.0);

    assert_eq!(viewer.on_slider(lid, 90.0), Some(90.0));
    assert_vec_close(position_of(viewer.scene().unwrap(), "Attached_lid"), [-1.0, 0.0, 0.0]);

    assert_eq!(viewer.on_slider(arm, 500.0), Some(20.0));
}

#[tokio::test]
async fn should_rotate_lamp_head_around_base() {
    let mut viewer = Viewer::default();
    viewer.preload().await;
    viewer.switch_model("lamp").await.unwrap();
    let control = viewer.session().controls()[0].handle();

    viewer.on_slider(control, 90.0);

    assert_vec_close(position_of(viewer.scene().unwrap(), "Attached_head"), [2.0, -3.0, 0.0]);
}

#[tokio::test]
async fn should_reject_unknown_models() {
    let mut viewer = Viewer::default();
    assert!(viewer.switch_model("teapot").await.is_err());
    assert_eq!(viewer.current_model(), None);
}

#[tokio::test]
async fn should_cache_preloaded_files() {
    let mut viewer = Viewer::new(ViewerConfig {
        models: vec![
            ModelEntry::new("hinge", "hinge_rig.gltf"),
            ModelEntry::new("missing", "missing.gltf"),
        ],
        ..Default::default()
    });
    assert_eq!(viewer.preload().await, 1);
    assert!(viewer.switch_model("missing").await.is_err());
}

#[test]
fn should_show_models_built_in_memory() {
    let mut viewer = Viewer::default();
    let (graph, _) = arm_rig();
    viewer.show_model("rig", graph).unwrap();
    assert_eq!(viewer.current_model(), Some("rig"));

    viewer.unload();
    viewer.unload();
    assert!(viewer.scene().is_none());
    assert!(viewer.panel().folders().is_empty());
    assert_eq!(viewer.on_slider(ControlId(0), 1.0), None);
}

#[test]
fn should_scan_every_root_of_an_in_memory_model() {
    let mut graph = SceneGraph::new();
    graph.add_root(SceneNode::group("Feature_Z_Rotation_Door"));
    let pivot = graph.add_root(SceneNode::group("Pivot_handle"));
    graph.get_mut(pivot).unwrap().local.position = Vector3::new(0.0, 2.0, 0.0);
    graph.add_root(SceneNode::group("Attached_handle"));
    let mut viewer = Viewer::default();

    let summary = viewer.show_model("door", graph).unwrap();

    assert_eq!(summary.controls, 1);
    assert_eq!(summary.attachments, 1);
    assert_eq!(viewer.scene().unwrap().roots().len(), 1);
    assert_vec_close(position_of(viewer.scene().unwrap(), "Attached_handle"), [0.0, 2.0, 0.0]);
}

#[test]
fn should_clamp_background_colour() {
    let mut viewer = Viewer::default();
    viewer.set_background([1.5, -0.2, f32::NAN]);
    assert_eq!(viewer.background(), [1.0, 0.0, 0.0]);
    viewer.set_background([0.2, 0.4, 0.6]);
    assert_eq!(viewer.background(), [0.2, 0.4, 0.6]);
}
