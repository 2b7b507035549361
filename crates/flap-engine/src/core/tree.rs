use slotmap::SlotMap;

use crate::api::types::NodeId;
use crate::components::{Component, ComponentKind, NodeComponent, TransformComponent};
use crate::core::node::GameNode;
use crate::math::Transform2;

/// Owning store for a scene graph.
///
/// Nodes live in a slot map keyed by [`NodeId`]. Slots freed by despawning
/// are reused, and the key's version makes any stale id resolve to nothing.
/// A node is created detached
/// and attached exactly once with [`SceneTree::append_child`]; after that it
/// belongs to its parent's subtree and is released together with it by
/// [`SceneTree::despawn_recursive`].
///
/// Structural preconditions (re-parenting, cycles, dead ids) are programmer
/// errors and panic.
#[derive(Debug, Default)]
pub struct SceneTree {
    nodes: SlotMap<NodeId, GameNode>,
}

impl SceneTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree with a specific node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Allocate a detached node with empty component slots.
    pub fn create_node(&mut self, name: impl Into<String>) -> NodeId {
        self.nodes.insert(GameNode::new(name))
    }

    /// Attach `child` as the new last child of `parent`.
    ///
    /// # Panics
    ///
    /// If either node does not exist, if `child` already has a parent, or if
    /// `child` is `parent` itself or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        assert!(self.contains(parent), "append_child: parent {} does not exist", parent);
        let child_node = self.node(child);
        if let Some(existing) = child_node.parent {
            panic!(
                "append_child: node {} ('{}') already has parent {}",
                child, child_node.name, existing
            );
        }
        assert!(child != parent, "append_child: cannot append node {} to itself", child);
        assert!(
            !self.is_ancestor(child, parent),
            "append_child: node {} is an ancestor of {}, appending would create a cycle",
            child,
            parent
        );

        let last = self.node(parent).last_child;
        match last {
            Some(last) => self.node_mut(last).next = Some(child),
            None => self.node_mut(parent).first_child = Some(child),
        }

        let child_node = self.node_mut(child);
        child_node.parent = Some(parent);
        child_node.prev = last;
        child_node.next = None;

        let parent_node = self.node_mut(parent);
        parent_node.last_child = Some(child);
        parent_node.child_count += 1;

        log::debug!("scene: appended {} under {}", self.path(child), parent);
    }

    /// Create a node and append it under `parent` in one step.
    pub fn spawn_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let child = self.create_node(name);
        self.append_child(parent, child);
        child
    }

    pub fn get(&self, id: NodeId) -> Option<&GameNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut GameNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.name.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Number of direct children (0 for a dead id).
    pub fn child_count(&self, id: NodeId) -> usize {
        self.get(id).map_or(0, |n| n.child_count)
    }

    /// Direct children in sibling (append) order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).and_then(|n| n.first_child),
        }
    }

    /// Parent, grandparent, ... up to the root. Excludes `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// Whether `ancestor` is a strict ancestor of `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|a| a == ancestor)
    }

    /// Slash-separated names from the root, e.g. `Main/Bird`. For logs.
    pub fn path(&self, id: NodeId) -> String {
        let mut names: Vec<&str> = self.ancestors(id).filter_map(|a| self.name(a)).collect();
        names.reverse();
        names.extend(self.name(id));
        names.join("/")
    }

    // -- Components --

    /// Store a component in its slot. Last write wins; returns the displaced one.
    ///
    /// # Panics
    ///
    /// If the node does not exist.
    pub fn set_component(&mut self, id: NodeId, component: impl Into<Component>) -> Option<Component> {
        self.node_mut(id).components.insert(component)
    }

    pub fn component<T: NodeComponent>(&self, id: NodeId) -> Option<&T> {
        self.get(id).and_then(|n| n.components.get::<T>())
    }

    pub fn component_mut<T: NodeComponent>(&mut self, id: NodeId) -> Option<&mut T> {
        self.get_mut(id).and_then(|n| n.components.get_mut::<T>())
    }

    pub fn remove_component<T: NodeComponent>(&mut self, id: NodeId) -> Option<T> {
        self.get_mut(id).and_then(|n| n.components.take::<T>())
    }

    pub fn has_component(&self, id: NodeId, kind: ComponentKind) -> bool {
        self.get(id).is_some_and(|n| n.components.contains(kind))
    }

    // -- Transforms --

    /// The node's own transform, identity when it has no `TransformComponent`.
    pub fn local_transform(&self, id: NodeId) -> Transform2 {
        self.component::<TransformComponent>(id)
            .map_or(Transform2::IDENTITY, TransformComponent::local_transform)
    }

    /// Placement of the node in root space:
    /// `compose(world(parent), local(node))`, i.e. `L_root * ... * L_node`.
    ///
    /// Nodes without a `TransformComponent` count as identity and do not stop
    /// the ancestors above them from contributing. Dead ids give identity.
    pub fn world_transform(&self, id: NodeId) -> Transform2 {
        if !self.contains(id) {
            return Transform2::IDENTITY;
        }
        self.ancestors(id).fold(self.local_transform(id), |world, ancestor| {
            Transform2::compose(self.local_transform(ancestor), world)
        })
    }

    // -- Teardown --

    /// Release `id`, all of its descendants and their components.
    /// The node is first unlinked from its parent. Returns the number of
    /// nodes released (0 if `id` was already dead).
    pub fn despawn_recursive(&mut self, id: NodeId) -> usize {
        if !self.contains(id) {
            return 0;
        }
        log::debug!("scene: despawning subtree {}", self.path(id));
        self.unlink(id);

        let mut released = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.remove(current) else { continue };
            stack.extend(self.sibling_chain(node.first_child));
            released += 1;
        }
        released
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node slots allocated, live or free.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Ids of all live nodes, in slot order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys()
    }

    /// Live nodes without a parent.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(|&id| self.parent(id).is_none())
    }

    /// Drop every node. Ids handed out before stay dead.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    fn unlink(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        let (parent, prev, next) = (node.parent.take(), node.prev.take(), node.next.take());
        let Some(parent) = parent else { return };

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.node_mut(parent).first_child = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.node_mut(parent).last_child = prev,
        }
        self.node_mut(parent).child_count -= 1;
    }

    fn sibling_chain(&self, first: Option<NodeId>) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(first, move |&c| self.get(c).and_then(|n| n.next))
    }

    fn node(&self, id: NodeId) -> &GameNode {
        self.get(id)
            .unwrap_or_else(|| panic!("scene: node {} does not exist", id))
    }

    fn node_mut(&mut self, id: NodeId) -> &mut GameNode {
        self.get_mut(id)
            .unwrap_or_else(|| panic!("scene: node {} does not exist", id))
    }
}

/// Iterator over a node's direct children, following `next` links.
pub struct Children<'a> {
    tree: &'a SceneTree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.get(current).and_then(|n| n.next);
        Some(current)
    }
}
