// math/bbox.rs
//
// Axis-aligned box given by its min/max corners. Used for sprite source and
// destination rectangles.

use glam::Vec2;

use super::vector::{V2, V2Ext};

/// Axis-aligned bounding box.
///
/// The constructor does not reorder corners: `min <= max` per component is
/// the caller's responsibility. A flipped box yields negative sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BBox2 {
    pub min: V2,
    pub max: V2,
}

impl BBox2 {
    pub const ZERO: Self = Self { min: Vec2::ZERO, max: Vec2::ZERO };

    /// The unit box `[0, 1] x [0, 1]`, i.e. a whole texture in normalized coordinates.
    pub const UNIT: Self = Self { min: Vec2::ZERO, max: Vec2::ONE };

    pub const fn new(min: V2, max: V2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: V2, size: V2) -> Self {
        Self { min, max: min + size }
    }

    /// Box of the given size with its min corner at the origin.
    pub fn from_size(size: V2) -> Self {
        Self::from_min_size(Vec2::ZERO, size)
    }

    pub fn size(&self) -> V2 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> V2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive on every edge.
    pub fn contains(&self, point: V2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    pub fn translate(&self, offset: V2) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    /// Scale both corners component-wise (e.g. normalized -> pixel coordinates).
    pub fn hadamard(&self, scale: V2) -> Self {
        Self::new(self.min.hadamard(scale), self.max.hadamard(scale))
    }

    /// Divide both corners component-wise (e.g. pixel -> normalized coordinates).
    pub fn hadamard_div(&self, divisor: V2) -> Self {
        Self::new(self.min.hadamard_div(divisor), self.max.hadamard_div(divisor))
    }
}
