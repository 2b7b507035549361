//! Renderer collaborator contract.
//!
//! The engine never talks to a graphics API. It hands fully resolved draw
//! requests (world transform, rectangles, texture handle, tint) to an
//! implementation of [`Renderer`]; the backend (OpenGL, wgpu, a recorder for
//! tests) decides how to get them on screen.

use glam::{Vec2, Vec4};

use crate::math::{BBox2, Transform2, V2};

/// A texture the asset loader resolved. `size` is in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureHandle {
    pub id: u32,
    pub size: V2,
}

impl TextureHandle {
    pub fn new(id: u32, width: f32, height: f32) -> Self {
        Self {
            id,
            size: Vec2::new(width, height),
        }
    }
}

/// A font the asset loader resolved.
///
/// Metrics are per unit of font size: a 20px line has an ascent of
/// `20.0 * ascent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontHandle {
    pub id: u32,
    pub ascent: f32,
    pub line_height: f32,
}

/// Renderer trait for drawing backends.
///
/// # Example Implementation
///
/// ```ignore
/// struct GlRenderer { /* context, programs, texture table */ }
///
/// impl Renderer for GlRenderer {
///     fn backend(&self) -> &'static str { "opengl" }
///     fn width(&self) -> f32 { self.width }
///     fn height(&self) -> f32 { self.height }
///     fn clear(&mut self) { /* glClear */ }
///     fn draw_texture(&mut self, transform: Transform2, dst: BBox2,
///                     texture: &TextureHandle, src: BBox2, tint: Vec4) {
///         // upload transform.to_gl_mat4_cols(), emit one quad
///     }
///     fn draw_line_text(&mut self, font: &FontHandle, size: f32,
///                       pos: V2, text: &str, color: Vec4) { /* glyph quads */ }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g. "opengl", "recording").
    fn backend(&self) -> &'static str;

    /// Drawable width in points.
    fn width(&self) -> f32;

    /// Drawable height in points.
    fn height(&self) -> f32;

    /// Start a new frame.
    fn clear(&mut self);

    /// Draw the `src` pixel rectangle of `texture` into the local box `dst`,
    /// placed by `transform`, multiplied by `tint`.
    fn draw_texture(
        &mut self,
        transform: Transform2,
        dst: BBox2,
        texture: &TextureHandle,
        src: BBox2,
        tint: Vec4,
    );

    /// Draw one line of text with its baseline starting at `pos`.
    fn draw_line_text(&mut self, font: &FontHandle, size: f32, pos: V2, text: &str, color: Vec4);

    fn font_ascent(&self, font: &FontHandle, size: f32) -> f32 {
        font.ascent * size
    }

    fn font_line_height(&self, font: &FontHandle, size: f32) -> f32 {
        font.line_height * size
    }
}
