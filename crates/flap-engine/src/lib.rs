pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod math;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::NodeId;
pub use assets::{AssetCache, AssetLoader, AssetManifest, ManifestLoader};
pub use components::{
    Component, ComponentKind, NodeComponent, Script, ScriptComponent, SpriteComponent,
    TransformComponent,
};
pub use crate::core::node::GameNode;
pub use crate::core::time::{FixedTimestep, FpsCounter};
pub use crate::core::tree::SceneTree;
pub use crate::core::walker::TreeWalker;
pub use input::{InputEvent, InputQueue, Key};
pub use math::{BBox2, Transform2, V2};
pub use renderer::{FontHandle, RenderBuffer, Renderer, SpriteInstance, TextureHandle};
pub use systems::{draw_fps_overlay, fixed_update, ready_scripts, render_scene, RenderStats};
