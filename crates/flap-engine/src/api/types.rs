use std::fmt;

slotmap::new_key_type! {
    /// Identifies a node in a [`SceneTree`](crate::core::tree::SceneTree).
    ///
    /// A slot-map key: index plus version. Once its node is despawned the id
    /// resolves to nothing, even after the slot is handed to a new node.
    /// `NodeId::default()` is the null key and never resolves.
    pub struct NodeId;
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:?}", self.0)
    }
}
