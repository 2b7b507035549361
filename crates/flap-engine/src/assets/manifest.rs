use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::assets::cache::AssetLoader;
use crate::renderer::traits::{FontHandle, TextureHandle};

/// Asset manifest describing the textures and fonts a game may request.
/// Loaded from a JSON file at runtime.
///
/// Keys are the paths game code uses (e.g. `"assets/sprites/base.png"`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Texture path → pixel dimensions.
    #[serde(default)]
    pub textures: HashMap<String, TextureDescriptor>,
    /// Font path → metrics.
    #[serde(default)]
    pub fonts: HashMap<String, FontDescriptor>,
}

/// Describes a single texture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Describes a font's vertical metrics, per unit of font size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Baseline-to-top distance (default: 0.8).
    #[serde(default = "default_ascent")]
    pub ascent: f32,
    /// Baseline-to-baseline distance (default: 1.2).
    #[serde(default = "default_line_height")]
    pub line_height: f32,
}

fn default_ascent() -> f32 {
    0.8
}

fn default_line_height() -> f32 {
    1.2
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// [`AssetLoader`] that answers from an [`AssetManifest`] without touching
/// the filesystem or a GPU. Ids are handed out in request order, starting at 1.
/// Paths missing from the manifest fail to load.
pub struct ManifestLoader {
    manifest: AssetManifest,
    next_id: u32,
}

impl ManifestLoader {
    pub fn new(manifest: AssetManifest) -> Self {
        Self { manifest, next_id: 1 }
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl AssetLoader for ManifestLoader {
    fn load_texture(&mut self, path: &str) -> Option<TextureHandle> {
        let desc = *self.manifest.textures.get(path)?;
        let id = self.next_id();
        Some(TextureHandle::new(id, desc.width as f32, desc.height as f32))
    }

    fn load_font(&mut self, path: &str) -> Option<FontHandle> {
        let desc = *self.manifest.fonts.get(path)?;
        let id = self.next_id();
        Some(FontHandle {
            id,
            ascent: desc.ascent,
            line_height: desc.line_height,
        })
    }
}
