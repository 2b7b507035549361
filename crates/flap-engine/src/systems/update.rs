//! Script drivers: walk the scene and fire each node's script hooks.

use crate::api::types::NodeId;
use crate::components::script::ScriptComponent;
use crate::components::ComponentKind;
use crate::core::tree::SceneTree;
use crate::core::walker::TreeWalker;

/// Fire `on_ready` on every script under `root` that has not been readied
/// yet. Returns how many scripts ran.
///
/// Call once after building the scene, and again after attaching new
/// scripted nodes; scripts that already ran are skipped.
pub fn ready_scripts(tree: &mut SceneTree, root: NodeId, walker: &mut TreeWalker) -> usize {
    let mut readied = 0;
    walker.begin(root);
    while let Some(node) = walker.current() {
        let pending = tree
            .component::<ScriptComponent>(node)
            .is_some_and(|script| !script.is_ready());
        if pending {
            if let Some(mut script) = tree.remove_component::<ScriptComponent>(node) {
                if script.ready(node, tree) {
                    readied += 1;
                }
                restore_script(tree, node, script);
            }
        }
        walker.advance(tree);
    }
    readied
}

/// Run one logic tick: call `on_fixed_update(node, tree, delta)` on every
/// script under `root`, in pre-order. Returns how many scripts ran.
///
/// Nodes without a script are skipped, as are nodes a script despawned
/// earlier in the same pass.
pub fn fixed_update(tree: &mut SceneTree, root: NodeId, walker: &mut TreeWalker, delta: f32) -> usize {
    let mut invoked = 0;
    walker.begin(root);
    while let Some(node) = walker.current() {
        if let Some(mut script) = tree.remove_component::<ScriptComponent>(node) {
            script.fixed_update(node, tree, delta);
            invoked += 1;
            restore_script(tree, node, script);
        }
        walker.advance(tree);
    }
    invoked
}

// Put a detached script back, unless the node died or the callback
// installed a replacement.
fn restore_script(tree: &mut SceneTree, node: NodeId, script: ScriptComponent) {
    if tree.contains(node) && !tree.has_component(node, ComponentKind::Script) {
        tree.set_component(node, script);
    }
}
