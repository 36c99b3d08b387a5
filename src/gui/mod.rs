//! GUI panel collaborator.
//!
//! The naming session only needs folders, bounded sliders and read-only
//! displays. [`GuiHost`] is the seam towards whatever renders them; [`Panel`]
//! is the retained implementation the viewer uses.

pub mod panel;

pub use panel::{Folder, Panel, Widget, WidgetKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub u32);

pub trait GuiHost {
    /// Creates a collapsible folder, expanded when `open` is set.
    fn add_folder(&mut self, label: &str, open: bool) -> FolderId;

    /// Adds a numeric slider bounded to `[min, max]`.
    fn add_slider(
        &mut self,
        folder: FolderId,
        label: &str,
        min: f32,
        max: f32,
        value: f32,
    ) -> ControlId;

    /// Adds a disabled numeric display.
    fn add_display(&mut self, folder: FolderId, label: &str, value: f32) -> ControlId;

    /// Removes the folder together with all of its controls. Unknown folders are ignored.
    fn destroy_folder(&mut self, folder: FolderId);
}
