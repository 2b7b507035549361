//! Resumable pre-order traversal of a [`SceneTree`].
//!
//! [`TreeWalker`] keeps its own explicit stack instead of recursing, and it
//! does not hold a borrow of the tree between steps. A driver can therefore
//! visit a node, mutate the tree (components, scripts), then step on:
//!
//! ```ignore
//! walker.begin(root);
//! while let Some(node) = walker.current() {
//!     run_script(&mut tree, node);
//!     walker.advance(&tree);
//! }
//! ```
//!
//! Structural changes mid-walk (appending or despawning nodes) are not
//! supported: children are read when their parent is left, and a despawned
//! node still on the stack is simply skipped by the drivers.

use crate::api::types::NodeId;
use crate::core::tree::SceneTree;

/// Initial stack capacity; deeper trees just grow the stack.
pub const DEFAULT_STACK_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StackEntry {
    node: NodeId,
    depth: usize,
}

/// Explicit-stack depth-first pre-order walker.
///
/// Depth counts from 1 at the root; 0 means the walk is exhausted.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    current: Option<NodeId>,
    depth: usize,
    stack: Vec<StackEntry>,
}

impl TreeWalker {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current: None,
            depth: 0,
            stack: Vec::with_capacity(capacity),
        }
    }

    /// (Re)start the walk at `root`. Any previous walk state is discarded.
    pub fn begin(&mut self, root: NodeId) -> &mut Self {
        self.current = Some(root);
        self.depth = 1;
        self.stack.clear();
        self
    }

    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// Node the walker is positioned on.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Depth of the current node (root = 1, exhausted = 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Step to the next node in pre-order.
    ///
    /// Children of the current node are pushed last-to-first so they pop in
    /// append order. A current node that no longer exists contributes no
    /// children.
    ///
    /// # Panics
    ///
    /// If the walk is already exhausted.
    pub fn advance(&mut self, tree: &SceneTree) {
        let current = self
            .current
            .expect("TreeWalker::advance called on an exhausted walker");

        let child_depth = self.depth + 1;
        let mut child = tree.get(current).and_then(|n| n.last_child);
        while let Some(id) = child {
            self.stack.push(StackEntry { node: id, depth: child_depth });
            child = tree.get(id).and_then(|n| n.prev);
        }

        match self.stack.pop() {
            Some(entry) => {
                self.current = Some(entry.node);
                self.depth = entry.depth;
            }
            None => {
                self.current = None;
                self.depth = 0;
            }
        }
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over `(node, depth)` pairs, built on [`TreeWalker`].
pub struct Walk<'a> {
    tree: &'a SceneTree,
    walker: TreeWalker,
}

impl<'a> Walk<'a> {
    pub fn new(tree: &'a SceneTree, root: NodeId) -> Self {
        let mut walker = TreeWalker::new();
        walker.begin(root);
        Self { tree, walker }
    }
}

impl Iterator for Walk<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.walker.current()?;
        let depth = self.walker.depth();
        self.walker.advance(self.tree);
        Some((node, depth))
    }
}

impl SceneTree {
    /// Pre-order `(node, depth)` pairs of the subtree rooted at `root`.
    pub fn walk(&self, root: NodeId) -> Walk<'_> {
        Walk::new(self, root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tree: &SceneTree, pairs: &[(NodeId, usize)]) -> Vec<(String, usize)> {
        pairs
            .iter()
            .map(|&(id, depth)| (tree.name(id).unwrap_or("?").to_string(), depth))
            .collect()
    }

    fn flappy_tree() -> (SceneTree, NodeId) {
        let mut tree = SceneTree::new();
        let main = tree.create_node("Main");
        for name in ["Background", "Bird", "Ground"] {
            tree.spawn_child(main, name);
        }
        (tree, main)
    }

    /// A
    /// ├── B
    /// │   ├── D
    /// │   └── E
    /// │       └── G
    /// └── C
    ///     └── F
    fn deep_tree() -> (SceneTree, NodeId) {
        let mut tree = SceneTree::new();
        let a = tree.create_node("A");
        let b = tree.spawn_child(a, "B");
        let c = tree.spawn_child(a, "C");
        tree.spawn_child(b, "D");
        let e = tree.spawn_child(b, "E");
        tree.spawn_child(c, "F");
        tree.spawn_child(e, "G");
        (tree, a)
    }

    #[test]
    fn flappy_scene_sequence() {
        let (tree, main) = flappy_tree();
        let pairs: Vec<_> = tree.walk(main).collect();
        assert_eq!(
            names(&tree, &pairs),
            vec![
                ("Main".to_string(), 1),
                ("Background".to_string(), 2),
                ("Bird".to_string(), 2),
                ("Ground".to_string(), 2),
            ]
        );
    }

    #[test]
    fn deep_tree_is_pre_order() {
        let (tree, a) = deep_tree();
        let pairs: Vec<_> = tree.walk(a).collect();
        let expected = [("A", 1), ("B", 2), ("D", 3), ("E", 3), ("G", 4), ("C", 2), ("F", 3)];
        assert_eq!(
            names(&tree, &pairs),
            expected.iter().map(|&(n, d)| (n.to_string(), d)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn visits_every_node_exactly_once() {
        let (tree, a) = deep_tree();
        let mut seen: Vec<NodeId> = tree.walk(a).map(|(id, _)| id).collect();
        assert_eq!(seen.len(), tree.len());
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), tree.len());
    }

    #[test]
    fn parents_precede_descendants() {
        let (tree, a) = deep_tree();
        let order: Vec<NodeId> = tree.walk(a).map(|(id, _)| id).collect();
        let position = |id: NodeId| order.iter().position(|&n| n == id).unwrap();
        for &id in &order {
            for ancestor in tree.ancestors(id) {
                assert!(position(ancestor) < position(id));
            }
        }
    }

    #[test]
    fn manual_stepping_matches_iterator() {
        let (tree, a) = deep_tree();
        let mut walker = TreeWalker::new();
        let mut manual = Vec::new();
        walker.begin(a);
        while walker.has_next() {
            manual.push((walker.current().unwrap(), walker.depth()));
            walker.advance(&tree);
        }
        assert_eq!(walker.depth(), 0);
        assert_eq!(manual, tree.walk(a).collect::<Vec<_>>());
    }

    #[test]
    fn restart_reproduces_sequence() {
        let (tree, a) = deep_tree();
        let mut walker = TreeWalker::new();
        let run = |walker: &mut TreeWalker| {
            let mut out = Vec::new();
            walker.begin(a);
            while let Some(node) = walker.current() {
                out.push((node, walker.depth()));
                walker.advance(&tree);
            }
            out
        };
        let first = run(&mut walker);
        let second = run(&mut walker);
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn restart_mid_walk_on_another_root() {
        let (tree, a) = deep_tree();
        let mut walker = TreeWalker::new();
        walker.begin(a);
        walker.advance(&tree);
        walker.advance(&tree);

        let c = tree.children(a).nth(1).unwrap();
        walker.begin(c);
        assert_eq!(walker.current(), Some(c));
        assert_eq!(walker.depth(), 1);
        walker.advance(&tree);
        assert_eq!(tree.name(walker.current().unwrap()), Some("F"));
        assert_eq!(walker.depth(), 2);
        walker.advance(&tree);
        assert!(!walker.has_next());
    }

    #[test]
    fn single_node_walk() {
        let mut tree = SceneTree::new();
        let only = tree.create_node("Only");
        assert_eq!(tree.walk(only).collect::<Vec<_>>(), vec![(only, 1)]);
    }

    #[test]
    fn deeper_than_initial_capacity() {
        let mut tree = SceneTree::new();
        let root = tree.create_node("0");
        let mut parent = root;
        for i in 1..100 {
            parent = tree.spawn_child(parent, i.to_string());
        }
        let mut walker = TreeWalker::with_capacity(4);
        walker.begin(root);
        let mut last_depth = 0;
        while walker.has_next() {
            last_depth = walker.depth();
            walker.advance(&tree);
        }
        assert_eq!(last_depth, 100);
    }

    #[test]
    fn wide_tree_keeps_append_order() {
        let mut tree = SceneTree::new();
        let root = tree.create_node("root");
        let kids: Vec<NodeId> = (0..64).map(|i| tree.spawn_child(root, format!("k{}", i))).collect();
        let visited: Vec<NodeId> = tree.walk(root).skip(1).map(|(id, _)| id).collect();
        assert_eq!(visited, kids);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn advance_past_end_panics() {
        let mut tree = SceneTree::new();
        let only = tree.create_node("Only");
        let mut walker = TreeWalker::new();
        walker.begin(only);
        walker.advance(&tree);
        walker.advance(&tree);
    }

    #[test]
    fn despawned_current_contributes_no_children() {
        let (mut tree, a) = deep_tree();
        let b = tree.children(a).next().unwrap();
        let mut walker = TreeWalker::new();
        walker.begin(a);
        walker.advance(&tree);
        assert_eq!(walker.current(), Some(b));

        tree.despawn_recursive(b);
        walker.advance(&tree);
        assert_eq!(tree.name(walker.current().unwrap()), Some("C"));
    }
}
