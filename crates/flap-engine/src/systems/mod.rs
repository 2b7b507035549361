pub mod render;
pub mod update;

pub use render::{draw_fps_overlay, render_scene, RenderStats};
pub use update::{fixed_update, ready_scripts};
