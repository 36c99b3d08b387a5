//! Derives interactive controls from parsed features and wires their handlers.
//!
//! Every axis of a feature becomes its own control. A scale control's range is
//! proportional to the scale baked into the asset, since assets are authored
//! at very different absolute scales; rotation controls always span a full turn.

use std::rc::Rc;

use cgmath::{Deg, Rad};
use log::{debug, warn};

use crate::{
    data_structures::{
        instance::Axis,
        scene_graph::{NodeId, SceneGraph},
    },
    gui::{ControlId, FolderId, GuiHost},
    naming::{parser::Operation, propagate::AttachmentSet, scan::Feature},
};

pub const MIN_SCALE: f32 = 0.01;
pub const ROTATION_BOUNDS: (f32, f32) = (-180.0, 180.0);

/// Handler run with the accepted value whenever a control changes.
pub type ChangeHandler = Box<dyn Fn(&mut SceneGraph, f32)>;

/// `[max(0.01, 0.1 × initial), 10 × initial]`.
pub fn scale_bounds(initial: f32) -> (f32, f32) {
    ((initial * 0.1).max(MIN_SCALE), initial * 10.0)
}

/// What a control writes to: one axis of one transform component of one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlBinding {
    pub target: NodeId,
    pub axis: Axis,
    pub operation: Operation,
    /// The baked scale was negative: slider values are magnitudes and the
    /// sign is restored when writing.
    pub mirrored: bool,
}

impl ControlBinding {
    /// Writes `value` to the bound axis only. Rotation values are degrees.
    pub fn apply(&self, graph: &mut SceneGraph, value: f32) {
        let Some(node) = graph.get_mut(self.target) else {
            return;
        };
        match self.operation {
            Operation::Scale if self.mirrored => node.local.set_scale_axis(self.axis, -value),
            Operation::Scale => node.local.set_scale_axis(self.axis, value),
            Operation::Rotation => node.local.set_rotation_axis(self.axis, Rad::from(Deg(value))),
            Operation::Unsupported => {}
        }
    }
}

/// A control derived from a feature before it is registered anywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlSpec {
    pub label: String,
    pub min: f32,
    pub max: f32,
    pub initial: f32,
    pub binding: ControlBinding,
}

/// One spec per axis of `feature`; empty for unsupported operations.
pub fn derive_controls(graph: &SceneGraph, feature: &Feature) -> Vec<ControlSpec> {
    let operation = feature.name.kind();
    if operation == Operation::Unsupported {
        return Vec::new();
    }
    let local = graph.get(feature.target).map(|node| node.local);

    feature
        .name
        .axes
        .iter()
        .map(|&axis| {
            let (initial, mirrored, (min, max)) = match operation {
                Operation::Scale => {
                    let baked = local.map(|local| local.scale_axis(axis));
                    let (initial, mirrored) = match baked {
                        Some(scale) if scale.is_finite() && scale != 0.0 => {
                            (scale.abs(), scale < 0.0)
                        }
                        Some(scale) => {
                            warn!(
                                "'{}' has a degenerate {} scale of {}, starting its control at 1.",
                                feature.name.object_name, axis, scale
                            );
                            (1.0, false)
                        }
                        None => (1.0, false),
                    };
                    (initial, mirrored, scale_bounds(initial))
                }
                _ => {
                    let initial = local
                        .map(|local| Deg::from(local.rotation_axis(axis)).0)
                        .filter(|deg| deg.is_finite())
                        .unwrap_or(0.0);
                    (initial, false, ROTATION_BOUNDS)
                }
            };
            ControlSpec {
                label: format!(
                    "{} {} {}",
                    feature.name.object_name, axis, feature.name.operation
                ),
                min,
                max,
                initial,
                binding: ControlBinding {
                    target: feature.target,
                    axis,
                    operation,
                    mirrored,
                },
            }
        })
        .collect()
}

/// A registered control: its GUI handle, its range and current value, and the
/// handler applying changes to the scene.
pub struct GeneratedControl {
    handle: ControlId,
    label: String,
    min: f32,
    max: f32,
    value: f32,
    binding: ControlBinding,
    on_change: ChangeHandler,
}

impl GeneratedControl {
    /// Wires `spec` to apply its binding and then re-solve all attachments.
    pub fn new(spec: ControlSpec, handle: ControlId, attachments: Rc<AttachmentSet>) -> Self {
        let binding = spec.binding;
        let on_change: ChangeHandler = Box::new(move |graph, value| {
            binding.apply(graph, value);
            attachments.propagate(graph);
        });
        Self {
            handle,
            label: spec.label,
            min: spec.min,
            max: spec.max,
            value: spec.initial,
            binding,
            on_change,
        }
    }

    pub fn handle(&self) -> ControlId {
        self.handle
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn binding(&self) -> &ControlBinding {
        &self.binding
    }

    /// Clamps `value` to the control's range, stores it and runs the handler.
    ///
    /// Non-finite values are rejected and leave the scene untouched.
    pub fn set_value(&mut self, graph: &mut SceneGraph, value: f32) -> Option<f32> {
        if !value.is_finite() {
            return None;
        }
        let value = value.clamp(self.min, self.max);
        self.value = value;
        (self.on_change)(graph, value);
        Some(value)
    }
}

impl std::fmt::Debug for GeneratedControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedControl")
            .field("handle", &self.handle)
            .field("label", &self.label)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value)
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}

/// Derives and registers the controls of every feature under `folder`.
pub fn bind_features(
    graph: &SceneGraph,
    features: &[Feature],
    attachments: &Rc<AttachmentSet>,
    gui: &mut dyn GuiHost,
    folder: FolderId,
) -> Vec<GeneratedControl> {
    features
        .iter()
        .flat_map(|feature| derive_controls(graph, feature))
        .map(|spec| {
            let handle = gui.add_slider(folder, &spec.label, spec.min, spec.max, spec.initial);
            debug!(
                "Control '{}' in [{}, {}] starting at {}",
                spec.label, spec.min, spec.max, spec.initial
            );
            GeneratedControl::new(spec, handle, Rc::clone(attachments))
        })
        .collect()
}
