pub mod node;
pub mod time;
pub mod tree;
pub mod walker;
