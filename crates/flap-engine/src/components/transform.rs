// components/transform.rs
//
// Local transform of a node, kept decomposed so scripts can animate each part
// independently. The affine matrix is rebuilt on every query.

use glam::Vec2;

use crate::math::{Transform2, V2};

/// Local transform relative to the parent node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformComponent {
    /// Position relative to the parent.
    pub translation: V2,
    /// Rotation in radians, counter-clockwise.
    pub rotation: f32,
    /// Non-uniform scale.
    pub scale: V2,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl TransformComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_translation(translation: V2) -> Self {
        Self::default().with_translation(translation)
    }

    pub fn with_translation(mut self, translation: V2) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: V2) -> Self {
        self.scale = scale;
        self
    }

    pub fn translate_by(&mut self, delta: V2) {
        self.translation += delta;
    }

    pub fn rotate_by(&mut self, rad: f32) {
        self.rotation += rad;
    }

    /// Affine form: scale, then rotate, then translate.
    pub fn local_transform(&self) -> Transform2 {
        let rotate_scale = Transform2::compose(
            Transform2::from_rotation(self.rotation),
            Transform2::from_scale(self.scale),
        );
        Transform2::compose(Transform2::from_translation(self.translation), rotate_scale)
    }
}
