pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use instance::{RenderBuffer, SpriteInstance, TextRun};
pub use traits::{FontHandle, Renderer, TextureHandle};
