//! One-pass classification of a node tree.

use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    data_structures::scene_graph::{NodeId, NodeVisitor, SceneGraph, SceneNode},
    naming::parser::{
        self, AttachmentKind, AttachmentName, FeatureName, Operation, parse_attachment_name,
        parse_feature_name,
    },
};

/// Node name to node handle. Later-visited nodes overwrite earlier ones.
pub type NodeIndex = HashMap<String, NodeId>;

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub target: NodeId,
    pub name: FeatureName,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    pub node: NodeId,
    pub name: AttachmentName,
}

impl Attachment {
    pub fn kind(&self) -> AttachmentKind {
        self.name.kind
    }

    pub fn target_name(&self) -> &str {
        &self.name.target_name
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// `Feature_` prefix with fewer than three segments.
    MalformedFeature,
    /// Feature whose axis segment holds none of X, Y or Z.
    NoAxes,
    /// Feature operation other than scale or rotation.
    UnsupportedOperation,
    /// An earlier node with the same name was overwritten in the index.
    DuplicateName,
    /// Named node matching no convention.
    Unclassified,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkippedName {
    pub node: NodeId,
    pub name: String,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, Default)]
pub struct ScanReport {
    pub features: Vec<Feature>,
    pub attachments: Vec<Attachment>,
    pub pivots: Vec<Attachment>,
    pub index: NodeIndex,
    pub skipped: Vec<SkippedName>,
    pub meshes: usize,
}

impl ScanReport {
    pub fn skipped_with(&self, reason: SkipReason) -> impl Iterator<Item = &SkippedName> {
        self.skipped.iter().filter(move |skip| skip.reason == reason)
    }

    fn skip(&mut self, node: NodeId, name: &str, reason: SkipReason) {
        debug!("Skipping node {:?} '{}': {:?}", node, name, reason);
        self.skipped.push(SkippedName {
            node,
            name: name.to_string(),
            reason,
        });
    }
}

impl NodeVisitor for ScanReport {
    fn visit_node(&mut self, id: NodeId, node: &SceneNode) {
        let Some(name) = node.name() else {
            return;
        };

        if let Some(previous) = self.index.insert(name.to_string(), id) {
            warn!(
                "Duplicate node name '{}': {:?} replaces {:?} in the index.",
                name, id, previous
            );
            self.skip(previous, name, SkipReason::DuplicateName);
        }

        if let Some(feature) = parse_feature_name(name) {
            if feature.axes.is_empty() {
                self.skip(id, name, SkipReason::NoAxes);
            } else if feature.kind() == Operation::Unsupported {
                self.skip(id, name, SkipReason::UnsupportedOperation);
            }
            self.features.push(Feature {
                target: id,
                name: feature,
            });
            return;
        }

        match parse_attachment_name(name) {
            Some(attachment) => {
                let kind = attachment.kind;
                let attachment = Attachment {
                    node: id,
                    name: attachment,
                };
                match kind {
                    AttachmentKind::Attached => self.attachments.push(attachment),
                    AttachmentKind::Pivot => self.pivots.push(attachment),
                }
            }
            None if parser::has_feature_prefix(name) => {
                self.skip(id, name, SkipReason::MalformedFeature)
            }
            None => self.skip(id, name, SkipReason::Unclassified),
        }
    }

    fn visit_mesh(&mut self, id: NodeId, node: &SceneNode, _mesh: &str) {
        self.meshes += 1;
        self.visit_node(id, node);
    }
}

/// Classifies every named node reachable from `root`. Never mutates the graph.
pub fn scan(graph: &SceneGraph, root: NodeId) -> ScanReport {
    let mut report = ScanReport::default();
    graph.accept(root, &mut report);
    report
}
