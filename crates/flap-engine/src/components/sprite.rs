use glam::{Vec2, Vec4};

use crate::math::{BBox2, V2, V2Ext};

/// Sprite component: draws a region of a texture at the node's world transform.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Texture path, resolved through the asset loader at render time.
    pub texture_path: String,
    /// Source region in normalized texture coordinates (0..1).
    /// `None` draws the whole texture.
    pub region: Option<BBox2>,
    /// Fractional point of the sprite's own box placed at the node origin.
    /// (0, 0) = min corner, (0.5, 0.5) = centre.
    pub anchor: V2,
    /// Color multiplier (RGBA, 1.0 = unchanged).
    pub tint: Vec4,
}

impl SpriteComponent {
    pub fn new(texture_path: impl Into<String>) -> Self {
        Self {
            texture_path: texture_path.into(),
            region: None,
            anchor: Vec2::ZERO,
            tint: Vec4::ONE,
        }
    }

    // -- Builder pattern --

    pub fn with_region(mut self, region: BBox2) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_anchor(mut self, anchor: V2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_tint(mut self, tint: Vec4) -> Self {
        self.tint = tint;
        self
    }

    /// Source rectangle in texture pixels.
    pub fn source_rect(&self, texture_size: V2) -> BBox2 {
        self.region.unwrap_or(BBox2::UNIT).hadamard(texture_size)
    }

    /// Destination box in the node's local space: as large as the source
    /// rectangle, shifted so that `anchor` lands on the origin.
    pub fn destination_rect(&self, texture_size: V2) -> BBox2 {
        let size = self.source_rect(texture_size).size();
        BBox2::from_min_size(-self.anchor.hadamard(size), size)
    }
}
