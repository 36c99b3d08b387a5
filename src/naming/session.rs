//! Lifecycle of the controls generated for one loaded model.

use std::rc::Rc;

use log::info;

use crate::{
    data_structures::scene_graph::{NodeId, SceneGraph},
    gui::{ControlId, FolderId, GuiHost},
    naming::{
        binder::{GeneratedControl, bind_features},
        propagate::AttachmentSet,
        scan::{Feature, SkippedName, scan},
    },
};

pub const FEATURES_FOLDER: &str = "Features";
pub const ATTACHMENTS_FOLDER: &str = "Attachments";

/// Counts logged at the end of [`NamingSession::begin`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub features: usize,
    pub controls: usize,
    pub attachments: usize,
    pub pivots: usize,
    pub meshes: usize,
    pub skipped: usize,
}

/// Owns the folders and controls generated for the current model.
///
/// The host calls [`NamingSession::end`] and then [`NamingSession::begin`]
/// whenever it swaps models so no control outlives its model.
#[derive(Debug, Default)]
pub struct NamingSession {
    folders: Vec<FolderId>,
    controls: Vec<GeneratedControl>,
    features: Vec<Feature>,
    attachments: Rc<AttachmentSet>,
    skipped: Vec<SkippedName>,
    summary: Option<SessionSummary>,
}

impl NamingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `root`, registers controls with `gui` and places all attachments.
    pub fn begin(
        &mut self,
        graph: &mut SceneGraph,
        root: NodeId,
        gui: &mut dyn GuiHost,
    ) -> SessionSummary {
        self.end(gui);

        let report = scan(graph, root);
        let attachments = Rc::new(AttachmentSet {
            attachments: report.attachments,
            index: report.index,
        });

        let features_folder = gui.add_folder(FEATURES_FOLDER, true);
        let controls = bind_features(
            graph,
            &report.features,
            &attachments,
            gui,
            features_folder,
        );

        let info_folder = gui.add_folder(ATTACHMENTS_FOLDER, false);
        gui.add_display(
            info_folder,
            "Attachments",
            attachments.attachments.len() as f32,
        );
        gui.add_display(info_folder, "Pivots", report.pivots.len() as f32);

        attachments.propagate(graph);

        let summary = SessionSummary {
            features: report.features.len(),
            controls: controls.len(),
            attachments: attachments.attachments.len(),
            pivots: report.pivots.len(),
            meshes: report.meshes,
            skipped: report.skipped.len(),
        };
        if summary.features == 0 {
            info!("Standard naming: no features found.");
        }
        info!(
            "Naming: {} features, {} controls, {} attachments, {} pivots, {} meshes, {} skipped",
            summary.features,
            summary.controls,
            summary.attachments,
            summary.pivots,
            summary.meshes,
            summary.skipped
        );

        self.folders = vec![features_folder, info_folder];
        self.controls = controls;
        self.features = report.features;
        self.attachments = attachments;
        self.skipped = report.skipped;
        self.summary = Some(summary);
        summary
    }

    /// Destroys every generated folder and control. Safe to call repeatedly.
    pub fn end(&mut self, gui: &mut dyn GuiHost) {
        for folder in self.folders.drain(..) {
            gui.destroy_folder(folder);
        }
        self.controls.clear();
        self.features.clear();
        self.attachments = Rc::default();
        self.skipped.clear();
        self.summary = None;
    }

    /// Routes a GUI change to the control registered under `control`.
    ///
    /// Returns the value actually applied after clamping, or `None` when the
    /// control is not part of this session.
    pub fn handle_change(
        &mut self,
        control: ControlId,
        value: f32,
        graph: &mut SceneGraph,
    ) -> Option<f32> {
        self.controls
            .iter_mut()
            .find(|generated| generated.handle() == control)?
            .set_value(graph, value)
    }

    /// Re-solves all attachments of the current session.
    pub fn propagate(&self, graph: &mut SceneGraph) -> usize {
        self.attachments.propagate(graph)
    }

    pub fn is_active(&self) -> bool {
        self.summary.is_some()
    }

    pub fn summary(&self) -> Option<SessionSummary> {
        self.summary
    }

    pub fn controls(&self) -> &[GeneratedControl] {
        &self.controls
    }

    pub fn control(&self, control: ControlId) -> Option<&GeneratedControl> {
        self.controls.iter().find(|generated| generated.handle() == control)
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn attachments(&self) -> &AttachmentSet {
        &self.attachments
    }

    pub fn skipped(&self) -> &[SkippedName] {
        &self.skipped
    }

    pub fn folders(&self) -> &[FolderId] {
        &self.folders
    }
}
