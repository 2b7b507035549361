use std::collections::HashMap;

use crate::renderer::traits::{FontHandle, TextureHandle};

/// Asset loader collaborator: resolves paths to loaded handles.
///
/// `None` is the failure sentinel (missing file, decode error, ...). Callers
/// skip whatever needed the asset instead of failing.
pub trait AssetLoader {
    fn load_texture(&mut self, path: &str) -> Option<TextureHandle>;
    fn load_font(&mut self, path: &str) -> Option<FontHandle>;
}

/// Memoizing wrapper around an [`AssetLoader`].
///
/// Each path hits the inner loader at most once. Failures are cached too, so
/// a missing texture is reported once instead of every frame.
pub struct AssetCache<L> {
    loader: L,
    textures: HashMap<String, Option<TextureHandle>>,
    fonts: HashMap<String, Option<FontHandle>>,
}

impl<L: AssetLoader> AssetCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            textures: HashMap::new(),
            fonts: HashMap::new(),
        }
    }

    /// The wrapped loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Number of distinct texture paths requested so far (hits and misses).
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Forget every cached result; the next request reloads.
    pub fn clear(&mut self) {
        self.textures.clear();
        self.fonts.clear();
    }
}

impl<L: AssetLoader> AssetLoader for AssetCache<L> {
    fn load_texture(&mut self, path: &str) -> Option<TextureHandle> {
        if let Some(cached) = self.textures.get(path) {
            return *cached;
        }
        let handle = self.loader.load_texture(path);
        match &handle {
            Some(tex) => log::debug!("assets: texture '{}' -> id {} ({}x{})", path, tex.id, tex.size.x, tex.size.y),
            None => log::warn!("assets: failed to load texture '{}', sprites using it are skipped", path),
        }
        self.textures.insert(path.to_string(), handle);
        handle
    }

    fn load_font(&mut self, path: &str) -> Option<FontHandle> {
        if let Some(cached) = self.fonts.get(path) {
            return *cached;
        }
        let handle = self.loader.load_font(path);
        if handle.is_none() {
            log::warn!("assets: failed to load font '{}'", path);
        }
        self.fonts.insert(path.to_string(), handle);
        handle
    }
}
