use crate::api::types::NodeId;
use crate::components::{ComponentKind, ComponentSlots, NodeComponent};

/// A scene-graph node.
///
/// Structural links form an intrusive tree: each node knows its parent, its
/// previous and next sibling, and the first and last of its own children.
/// The links are ids into the owning [`SceneTree`](super::tree::SceneTree);
/// only the tree may rewrite them, so they are read-only from outside.
#[derive(Debug)]
pub struct GameNode {
    /// Debug label. Not unique and never used for lookups.
    pub name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) child_count: usize,
    /// One optional component per kind.
    pub components: ComponentSlots,
}

impl GameNode {
    /// A detached node: no parent, no children, no components.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            prev: None,
            next: None,
            first_child: None,
            last_child: None,
            child_count: 0,
            components: ComponentSlots::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn prev_sibling(&self) -> Option<NodeId> {
        self.prev
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn last_child(&self) -> Option<NodeId> {
        self.last_child
    }

    pub fn child_count(&self) -> usize {
        self.child_count
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn component<T: NodeComponent>(&self) -> Option<&T> {
        self.components.get::<T>()
    }

    pub fn component_mut<T: NodeComponent>(&mut self) -> Option<&mut T> {
        self.components.get_mut::<T>()
    }

    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.components.contains(kind)
    }
}
