use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

use crate::math::{BBox2, Transform2, V2};
use crate::renderer::traits::{FontHandle, Renderer, TextureHandle};

/// Per-sprite record as a GPU backend would upload it.
/// 19 four-byte words = 76 bytes stride, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// World transform columns: a, b, c, d, x, y.
    pub transform: [f32; 6],
    /// Destination box in local space: min.x, min.y, max.x, max.y.
    pub dst: [f32; 4],
    /// Source box in normalized texture coordinates: min.u, min.v, max.u, max.v.
    pub uv: [f32; 4],
    /// RGBA multiplier.
    pub tint: [f32; 4],
    /// Texture id from the asset loader.
    pub texture: u32,
}

impl SpriteInstance {
    pub const WORDS: usize = 19;
    pub const STRIDE_BYTES: usize = Self::WORDS * 4;

    pub fn world_transform(&self) -> Transform2 {
        let [a, b, c, d, x, y] = self.transform;
        Transform2::from_cols(Vec2::new(a, b), Vec2::new(c, d), Vec2::new(x, y))
    }

    pub fn dst_box(&self) -> BBox2 {
        box_from_array(self.dst)
    }

    pub fn uv_box(&self) -> BBox2 {
        box_from_array(self.uv)
    }
}

fn box_to_array(b: BBox2) -> [f32; 4] {
    [b.min.x, b.min.y, b.max.x, b.max.y]
}

fn box_from_array([x0, y0, x1, y1]: [f32; 4]) -> BBox2 {
    BBox2::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
}

/// A recorded line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub font: u32,
    pub size: f32,
    pub pos: V2,
    pub text: String,
    pub color: Vec4,
}

/// Headless [`Renderer`] that records a frame's draw calls.
///
/// Sprites become [`SpriteInstance`]s (ready for a raw byte upload via
/// [`RenderBuffer::as_bytes`]); text lines become [`TextRun`]s.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    width: f32,
    height: f32,
    /// Sprite instances in draw order.
    pub instances: Vec<SpriteInstance>,
    /// Text lines in draw order.
    pub text: Vec<TextRun>,
    frames: u64,
}

impl RenderBuffer {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_capacity(width, height, 256)
    }

    pub fn with_capacity(width: f32, height: f32, capacity: usize) -> Self {
        Self {
            width,
            height,
            instances: Vec::with_capacity(capacity),
            text: Vec::new(),
            frames: 0,
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as raw bytes for a vertex/instance buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Number of frames started with [`Renderer::clear`].
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for RenderBuffer {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.instances.clear();
        self.text.clear();
        self.frames += 1;
    }

    fn draw_texture(
        &mut self,
        transform: Transform2,
        dst: BBox2,
        texture: &TextureHandle,
        src: BBox2,
        tint: Vec4,
    ) {
        let uv = if texture.size.x == 0.0 || texture.size.y == 0.0 {
            BBox2::ZERO
        } else {
            src.hadamard_div(texture.size)
        };
        self.instances.push(SpriteInstance {
            transform: transform.to_cols_array(),
            dst: box_to_array(dst),
            uv: box_to_array(uv),
            tint: tint.to_array(),
            texture: texture.id,
        });
    }

    fn draw_line_text(&mut self, font: &FontHandle, size: f32, pos: V2, text: &str, color: Vec4) {
        self.text.push(TextRun {
            font: font.id,
            size,
            pos,
            text: text.to_string(),
            color,
        });
    }
}
