//! Scene graph and hierarchical scene organization.
//!
//! Nodes live in an arena owned by [`SceneGraph`] and are addressed by
//! [`NodeId`] handles, so lookups tables and control handlers can refer to
//! nodes without owning them. Each node keeps its local [`Instance`];
//! world transforms are composed on demand from the root down.

use cgmath::Vector3;
use log::{debug, warn};

use crate::data_structures::instance::{Instance, WorldTransform};

/// Handle of a node inside a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The closed set of node variants a scene graph holds.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Pure transform node without geometry.
    Group,
    /// Node referencing a mesh by name.
    Mesh { mesh: String, primitives: usize },
    /// Cameras, lights and anything else the viewer does not interpret.
    Other,
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    name: Option<String>,
    kind: NodeKind,
    pub local: Instance,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            name: None,
            kind,
            local: Instance::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn group(name: &str) -> Self {
        Self::new(NodeKind::Group).named(name)
    }

    pub fn mesh(name: &str, mesh: &str) -> Self {
        Self::new(NodeKind::Mesh {
            mesh: mesh.to_string(),
            primitives: 1,
        })
        .named(name)
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_transform(mut self, local: Instance) -> Self {
        self.local = local;
        self
    }

    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.local.position = position;
        self
    }

    /// The node's name, `None` when absent or empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Typed visitor over the node variants, driven by [`SceneGraph::accept`].
///
/// Every variant-specific hook falls back to [`NodeVisitor::visit_node`], so
/// visitors that don't care about the variant only implement that one.
pub trait NodeVisitor {
    fn visit_node(&mut self, _id: NodeId, _node: &SceneNode) {}

    fn visit_group(&mut self, id: NodeId, node: &SceneNode) {
        self.visit_node(id, node);
    }

    fn visit_mesh(&mut self, id: NodeId, node: &SceneNode, _mesh: &str) {
        self.visit_node(id, node);
    }

    fn visit_other(&mut self, id: NodeId, node: &SceneNode) {
        self.visit_node(id, node);
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, mut node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = None;
        node.children.clear();
        self.nodes.push(node);
        self.roots.push(id);
        id
    }

    /// Appends `node` under `parent`. An unknown parent makes the node a root.
    pub fn add_child(&mut self, parent: NodeId, mut node: SceneNode) -> NodeId {
        if parent.0 >= self.nodes.len() {
            warn!(
                "Parent {} does not exist in a graph of {} nodes, adding as root.",
                parent.0,
                self.nodes.len()
            );
            return self.add_root(node);
        }
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The graph's only root. Several roots are first moved under a new
    /// unnamed group, which becomes the single root; `None` for an empty graph.
    pub fn single_root(&mut self) -> Option<NodeId> {
        match self.roots.as_slice() {
            [] => None,
            [root] => Some(*root),
            roots => {
                debug!("Wrapping {} root nodes into one group", roots.len());
                let wrapper = NodeId(self.nodes.len());
                let children = std::mem::take(&mut self.roots);
                for child in &children {
                    self.nodes[child.0].parent = Some(wrapper);
                }
                let mut group = SceneNode::new(NodeKind::Group);
                group.children = children;
                self.nodes.push(group);
                self.roots.push(wrapper);
                Some(wrapper)
            }
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node carrying `name`, in arena order.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.name() == Some(name))
            .map(NodeId)
    }

    /// Composes the local transforms of `id` and all its ancestors.
    pub fn world_transform(&self, id: NodeId) -> Option<WorldTransform> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id)?;
            chain.push(&node.local);
            current = node.parent;
        }
        Some(
            chain
                .into_iter()
                .rev()
                .fold(WorldTransform::identity(), |parent, local| &parent * local),
        )
    }

    pub fn world_position(&self, id: NodeId) -> Option<Vector3<f32>> {
        self.world_transform(id).map(|world| world.position())
    }

    /// Converts a world-space point into the local space of `parent`.
    ///
    /// Without a parent (or with a stale handle) the conversion is the identity.
    pub fn world_to_local(&self, point: Vector3<f32>, parent: Option<NodeId>) -> Vector3<f32> {
        match parent.and_then(|parent| self.world_transform(parent)) {
            Some(parent_world) => parent_world.inverse_transform_point(point),
            None => point,
        }
    }

    /// Visits `root` and all its descendants, parents before children.
    pub fn traverse(&self, root: NodeId, f: &mut dyn FnMut(NodeId, &SceneNode)) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            f(id, node);
            stack.extend(node.children.iter().rev().copied());
        }
    }

    /// Pre-order traversal dispatching each node to the visitor hook of its variant.
    pub fn accept<V: NodeVisitor + ?Sized>(&self, root: NodeId, visitor: &mut V) {
        self.traverse(root, &mut |id, node| match &node.kind {
            NodeKind::Group => visitor.visit_group(id, node),
            NodeKind::Mesh { mesh, .. } => visitor.visit_mesh(id, node, mesh),
            NodeKind::Other => visitor.visit_other(id, node),
        });
    }
}
