pub mod cache;
pub mod manifest;

pub use cache::{AssetCache, AssetLoader};
pub use manifest::{AssetManifest, FontDescriptor, ManifestLoader, TextureDescriptor};
