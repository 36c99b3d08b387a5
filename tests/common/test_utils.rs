use flow_rig::{
    Vector3,
    data_structures::{
        instance::Instance,
        scene_graph::{NodeId, SceneGraph, SceneNode},
    },
    gui::{ControlId, FolderId, GuiHost, Panel},
};

pub(crate) const EPSILON: f32 = 1e-4;

pub(crate) fn assert_vec_close(actual: Vector3<f32>, expected: [f32; 3]) {
    let close = (actual.x - expected[0]).abs() < EPSILON
        && (actual.y - expected[1]).abs() < EPSILON
        && (actual.z - expected[2]).abs() < EPSILON;
    assert!(close, "expected {:?}, got {:?}", expected, actual);
}

pub(crate) fn position_of(graph: &SceneGraph, name: &str) -> Vector3<f32> {
    let id = graph.find(name).expect("node should exist");
    graph.get(id).expect("node should exist").local.position
}

/// Ids of the nodes of [`arm_rig`].
pub(crate) struct ArmRig {
    pub root: NodeId,
    pub arm: NodeId,
    pub tip: NodeId,
    pub follower: NodeId,
}

/// `Rig` group holding a scaled `Feature_X_Scale_Arm` with a `Pivot_tip`
/// child and a free `Attached_tip` under the root.
pub(crate) fn arm_rig() -> (SceneGraph, ArmRig) {
    let mut graph = SceneGraph::new();
    let root = graph.add_root(SceneNode::group("Rig"));
    let arm = graph.add_child(
        root,
        SceneNode::mesh("Feature_X_Scale_Arm", "arm_mesh").with_transform(Instance {
            scale: Vector3::new(2.0, 1.0, 1.0),
            ..Default::default()
        }),
    );
    let tip = graph.add_child(
        arm,
        SceneNode::group("Pivot_tip").with_position(Vector3::new(1.0, 0.0, 0.0)),
    );
    let follower = graph.add_child(
        root,
        SceneNode::mesh("Attached_tip", "tip_mesh").with_position(Vector3::new(0.0, 5.0, 0.0)),
    );
    (
        graph,
        ArmRig {
            root,
            arm,
            tip,
            follower,
        },
    )
}

/// Records every call made by a naming session on top of a real [`Panel`].
#[derive(Default)]
pub(crate) struct RecordingGui {
    pub panel: Panel,
    pub destroyed: Vec<FolderId>,
    pub sliders: Vec<String>,
}

impl GuiHost for RecordingGui {
    fn add_folder(&mut self, label: &str, open: bool) -> FolderId {
        self.panel.add_folder(label, open)
    }

    fn add_slider(
        &mut self,
        folder: FolderId,
        label: &str,
        min: f32,
        max: f32,
        value: f32,
    ) -> ControlId {
        self.sliders.push(label.to_string());
        self.panel.add_slider(folder, label, min, max, value)
    }

    fn add_display(&mut self, folder: FolderId, label: &str, value: f32) -> ControlId {
        self.panel.add_display(folder, label, value)
    }

    fn destroy_folder(&mut self, folder: FolderId) {
        self.destroyed.push(folder);
        self.panel.destroy_folder(folder);
    }
}
