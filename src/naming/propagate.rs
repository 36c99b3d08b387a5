//! Attachment propagation: glue attached nodes to their pivots.

use log::trace;

use crate::{
    data_structures::scene_graph::{NodeId, SceneGraph},
    naming::{
        parser::{ATTACHED_PREFIX, PIVOT_PREFIX},
        scan::{Attachment, NodeIndex},
    },
};

/// Attachments and lookup table captured at scan time, shared by every
/// control handler of a session.
#[derive(Clone, Debug, Default)]
pub struct AttachmentSet {
    pub attachments: Vec<Attachment>,
    pub index: NodeIndex,
}

impl AttachmentSet {
    pub fn propagate(&self, graph: &mut SceneGraph) -> usize {
        propagate(graph, &self.attachments, &self.index)
    }
}

/// Node driving `attachment`: `Pivot_<target>` first, then `Attached_<target>`.
pub fn resolve_driver(attachment: &Attachment, index: &NodeIndex) -> Option<NodeId> {
    let target = attachment.target_name();
    index
        .get(&format!("{}{}", PIVOT_PREFIX, target))
        .or_else(|| index.get(&format!("{}{}", ATTACHED_PREFIX, target)))
        .copied()
}

/// Moves every attachment onto its driver's world position.
///
/// One flat pass in slice order; dangling references are left where they are.
/// Returns the number of attachments that were repositioned.
pub fn propagate(graph: &mut SceneGraph, attachments: &[Attachment], index: &NodeIndex) -> usize {
    let mut moved = 0;
    for attachment in attachments {
        let Some(driver) = resolve_driver(attachment, index) else {
            trace!(
                "No pivot for attachment '{}', leaving it in place.",
                attachment.target_name()
            );
            continue;
        };
        let Some(world) = graph.world_position(driver) else {
            continue;
        };
        let parent = graph.get(attachment.node).and_then(|node| node.parent());
        let local = graph.world_to_local(world, parent);
        if let Some(node) = graph.get_mut(attachment.node) {
            node.local.position = local;
            moved += 1;
        }
    }
    moved
}
