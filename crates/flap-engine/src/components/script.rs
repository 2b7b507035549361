use std::fmt;

use crate::api::types::NodeId;
use crate::core::tree::SceneTree;

/// Per-node behaviour. The implementing type holds the script's own state.
///
/// Both hooks are optional. A script runs detached from its node for the
/// duration of a call, so it may freely mutate the tree (including the
/// components of its own node) through `tree`.
pub trait Script {
    /// Called once, by [`ready_scripts`](crate::systems::update::ready_scripts).
    fn on_ready(&mut self, _node: NodeId, _tree: &mut SceneTree) {}

    /// Called every logic tick with the tick's elapsed time in seconds.
    fn on_fixed_update(&mut self, _node: NodeId, _tree: &mut SceneTree, _delta: f32) {}
}

/// Adapts a closure into a [`Script`] that only has a fixed-update hook.
pub struct FixedUpdateFn<F>(pub F);

impl<F> Script for FixedUpdateFn<F>
where
    F: FnMut(NodeId, &mut SceneTree, f32),
{
    fn on_fixed_update(&mut self, node: NodeId, tree: &mut SceneTree, delta: f32) {
        (self.0)(node, tree, delta)
    }
}

/// Script component: owns a boxed [`Script`].
pub struct ScriptComponent {
    script: Box<dyn Script>,
    ready: bool,
}

impl ScriptComponent {
    pub fn new(script: impl Script + 'static) -> Self {
        Self {
            script: Box::new(script),
            ready: false,
        }
    }

    /// Script with only an `on_fixed_update` hook.
    pub fn from_fn<F>(on_fixed_update: F) -> Self
    where
        F: FnMut(NodeId, &mut SceneTree, f32) + 'static,
    {
        Self::new(FixedUpdateFn(on_fixed_update))
    }

    /// Whether `on_ready` has already fired.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Fire `on_ready` unless it already fired. Returns true if it ran.
    pub fn ready(&mut self, node: NodeId, tree: &mut SceneTree) -> bool {
        if self.ready {
            return false;
        }
        self.ready = true;
        self.script.on_ready(node, tree);
        true
    }

    pub fn fixed_update(&mut self, node: NodeId, tree: &mut SceneTree, delta: f32) {
        self.script.on_fixed_update(node, tree, delta);
    }
}

impl fmt::Debug for ScriptComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptComponent")
            .field("ready", &self.ready)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counter {
        readied: Rc<Cell<u32>>,
        ticks: Rc<Cell<u32>>,
    }

    impl Script for Counter {
        fn on_ready(&mut self, _node: NodeId, _tree: &mut SceneTree) {
            self.readied.set(self.readied.get() + 1);
        }

        fn on_fixed_update(&mut self, _node: NodeId, _tree: &mut SceneTree, _delta: f32) {
            self.ticks.set(self.ticks.get() + 1);
        }
    }

    #[test]
    fn ready_fires_once() {
        let mut tree = SceneTree::new();
        let node = tree.create_node("Bird");
        let readied = Rc::new(Cell::new(0));
        let mut script = ScriptComponent::new(Counter {
            readied: readied.clone(),
            ticks: Rc::new(Cell::new(0)),
        });

        assert!(!script.is_ready());
        assert!(script.ready(node, &mut tree));
        assert!(!script.ready(node, &mut tree));
        assert!(script.is_ready());
        assert_eq!(readied.get(), 1);
    }

    #[test]
    fn closure_script_receives_delta() {
        let mut tree = SceneTree::new();
        let node = tree.create_node("Ground");
        let total = Rc::new(Cell::new(0.0f32));
        let seen = total.clone();
        let mut script = ScriptComponent::from_fn(move |_, _, delta| seen.set(seen.get() + delta));

        script.fixed_update(node, &mut tree, 0.25);
        script.fixed_update(node, &mut tree, 0.5);
        assert_eq!(total.get(), 0.75);

        // closures have no ready hook; marking ready is still tracked
        assert!(script.ready(node, &mut tree));
    }

    #[test]
    fn default_hooks_are_noops() {
        struct Idle;
        impl Script for Idle {}

        let mut tree = SceneTree::new();
        let node = tree.create_node("Main");
        let mut script = ScriptComponent::new(Idle);
        script.fixed_update(node, &mut tree, 1.0);
        assert!(script.ready(node, &mut tree));
        assert!(format!("{:?}", script).contains("ready: true"));
    }
}
