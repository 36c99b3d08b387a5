//! Retained GUI panel: folders holding sliders and read-only displays.

use log::warn;

use crate::gui::{ControlId, FolderId, GuiHost};

#[derive(Clone, Debug, PartialEq)]
pub enum WidgetKind {
    Slider { min: f32, max: f32 },
    Display,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub id: ControlId,
    pub label: String,
    pub kind: WidgetKind,
    pub value: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Folder {
    pub id: FolderId,
    pub label: String,
    pub open: bool,
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Default)]
pub struct Panel {
    folders: Vec<Folder>,
    next_folder: u32,
    next_control: u32,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id == id)
    }

    pub fn find_folder(&self, label: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.label == label)
    }

    pub fn widget(&self, id: ControlId) -> Option<&Widget> {
        self.folders
            .iter()
            .flat_map(|folder| folder.widgets.iter())
            .find(|widget| widget.id == id)
    }

    pub fn widget_count(&self) -> usize {
        self.folders.iter().map(|folder| folder.widgets.len()).sum()
    }

    /// Expands or collapses a folder.
    pub fn set_open(&mut self, id: FolderId, open: bool) {
        if let Some(folder) = self.folders.iter_mut().find(|folder| folder.id == id) {
            folder.open = open;
        }
    }

    /// Moves a slider, clamped to its own range. Returns the accepted value.
    ///
    /// Displays, unknown ids and non-finite values are rejected.
    pub fn set_slider(&mut self, id: ControlId, value: f32) -> Option<f32> {
        let widget = self
            .folders
            .iter_mut()
            .flat_map(|folder| folder.widgets.iter_mut())
            .find(|widget| widget.id == id)?;
        match widget.kind {
            WidgetKind::Slider { min, max } if value.is_finite() => {
                widget.value = value.clamp(min, max);
                Some(widget.value)
            }
            WidgetKind::Slider { .. } => None,
            WidgetKind::Display => {
                warn!("Control '{}' is read-only.", widget.label);
                None
            }
        }
    }

    fn push_widget(
        &mut self,
        folder: FolderId,
        label: &str,
        kind: WidgetKind,
        value: f32,
    ) -> ControlId {
        let id = ControlId(self.next_control);
        self.next_control += 1;
        match self.folders.iter_mut().find(|f| f.id == folder) {
            Some(folder) => folder.widgets.push(Widget {
                id,
                label: label.to_string(),
                kind,
                value,
            }),
            None => warn!(
                "Folder {:?} does not exist, control '{}' is not shown.",
                folder, label
            ),
        }
        id
    }
}

impl GuiHost for Panel {
    fn add_folder(&mut self, label: &str, open: bool) -> FolderId {
        let id = FolderId(self.next_folder);
        self.next_folder += 1;
        self.folders.push(Folder {
            id,
            label: label.to_string(),
            open,
            widgets: Vec::new(),
        });
        id
    }

    fn add_slider(
        &mut self,
        folder: FolderId,
        label: &str,
        min: f32,
        max: f32,
        value: f32,
    ) -> ControlId {
        self.push_widget(folder, label, WidgetKind::Slider { min, max }, value)
    }

    fn add_display(&mut self, folder: FolderId, label: &str, value: f32) -> ControlId {
        self.push_widget(folder, label, WidgetKind::Display, value)
    }

    fn destroy_folder(&mut self, folder: FolderId) {
        self.folders.retain(|f| f.id != folder);
    }
}
