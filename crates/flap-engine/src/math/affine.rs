// math/affine.rs
//
// 2D affine transform: a 2x2 linear part plus a translation, stored as the
// 2x3 matrix
//
//     | a c x |
//     | b d y |      (homogeneous row [0 0 1] implied)
//
// and applied to column vectors: v' = M * v. Columns are x_axis = (a, b),
// y_axis = (c, d), origin = (x, y).
//
// Composition convention: `compose(a, b)` applies `b` first, then `a`.
// The scene graph resolves world transforms as `compose(parent_world, local)`.

use std::ops::Mul;

use glam::{Affine2, Mat2, Vec2};

use super::vector::V2;

/// Affine transform in 2D, backed by `glam::Affine2`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform2(pub Affine2);

impl Transform2 {
    pub const IDENTITY: Self = Self(Affine2::IDENTITY);

    /// Build from the three matrix columns.
    pub fn from_cols(x_axis: V2, y_axis: V2, origin: V2) -> Self {
        Self(Affine2::from_cols(x_axis, y_axis, origin))
    }

    /// Counter-clockwise rotation by `rad` radians.
    pub fn from_rotation(rad: f32) -> Self {
        let (sin, cos) = rad.sin_cos();
        Self::from_cols(Vec2::new(cos, sin), Vec2::new(-sin, cos), Vec2::ZERO)
    }

    /// Non-uniform scale along x and y.
    pub fn from_scale(scale: V2) -> Self {
        Self::from_cols(Vec2::new(scale.x, 0.0), Vec2::new(0.0, scale.y), Vec2::ZERO)
    }

    pub fn from_translation(offset: V2) -> Self {
        Self::from_cols(Vec2::X, Vec2::Y, offset)
    }

    pub fn a(&self) -> f32 {
        self.0.matrix2.x_axis.x
    }

    pub fn b(&self) -> f32 {
        self.0.matrix2.x_axis.y
    }

    pub fn c(&self) -> f32 {
        self.0.matrix2.y_axis.x
    }

    pub fn d(&self) -> f32 {
        self.0.matrix2.y_axis.y
    }

    pub fn x_axis(&self) -> V2 {
        self.0.matrix2.x_axis
    }

    pub fn y_axis(&self) -> V2 {
        self.0.matrix2.y_axis
    }

    pub fn origin(&self) -> V2 {
        self.0.translation
    }

    /// Matrix product `a * b`: the result applies `b`, then `a`.
    ///
    /// `b`'s translation column is carried through `a`'s linear part.
    pub fn compose(a: Transform2, b: Transform2) -> Transform2 {
        Transform2(a.0 * b.0)
    }

    /// Apply `t`, then rotate by `rad`.
    pub fn rotate(rad: f32, t: Transform2) -> Transform2 {
        Self::compose(Self::from_rotation(rad), t)
    }

    /// Apply `t`, then scale by `scale`.
    pub fn scale(scale: V2, t: Transform2) -> Transform2 {
        Self::compose(Self::from_scale(scale), t)
    }

    /// Apply `t`, then translate by `offset`.
    pub fn translate(offset: V2, t: Transform2) -> Transform2 {
        Self::compose(Self::from_translation(offset), t)
    }

    /// Determinant of the 2x2 linear part.
    pub fn determinant(&self) -> f32 {
        self.0.matrix2.determinant()
    }

    /// Inverse transform, or `None` if the linear part is singular
    /// (determinant exactly zero).
    pub fn try_inverse(&self) -> Option<Transform2> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }

        let inv_det = 1.0 / det;
        let (a, b, c, d) = (self.a(), self.b(), self.c(), self.d());
        let (x, y) = (self.origin().x, self.origin().y);

        let matrix2 = Mat2::from_cols(
            Vec2::new(d * inv_det, -b * inv_det),
            Vec2::new(-c * inv_det, a * inv_det),
        );
        let translation = Vec2::new(
            (c * y - x * d) * inv_det,
            (x * b - a * y) * inv_det,
        );
        Some(Transform2(Affine2 { matrix2, translation }))
    }

    /// Inverse transform, returning `self` unchanged when singular.
    ///
    /// An unchanged result is indistinguishable from a real inverse of an
    /// involution, so callers that care must check [`Transform2::determinant`]
    /// or use [`Transform2::try_inverse`].
    pub fn inverse_or_self(&self) -> Transform2 {
        self.try_inverse().unwrap_or(*self)
    }

    /// Map a point (linear part + translation).
    pub fn apply(&self, point: V2) -> V2 {
        self.0.transform_point2(point)
    }

    /// Map a direction (linear part only).
    pub fn apply_vector(&self, vector: V2) -> V2 {
        self.0.transform_vector2(vector)
    }

    /// Lengths of the two axis columns.
    pub fn scale_factors(&self) -> V2 {
        Vec2::new(self.x_axis().length(), self.y_axis().length())
    }

    /// Column-major 4x4 matrix as consumed by a GL vertex shader.
    pub fn to_gl_mat4_cols(&self) -> [f32; 16] {
        let (a, b, c, d) = (self.a(), self.b(), self.c(), self.d());
        let o = self.origin();
        [
            a, b, 0.0, 0.0,
            c, d, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            o.x, o.y, 0.0, 1.0,
        ]
    }

    /// The six matrix entries in column order: a, b, c, d, x, y.
    pub fn to_cols_array(&self) -> [f32; 6] {
        self.0.to_cols_array()
    }

    /// Exact-float identity check.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl From<Affine2> for Transform2 {
    fn from(affine: Affine2) -> Self {
        Self(affine)
    }
}

impl Mul for Transform2 {
    type Output = Transform2;

    fn mul(self, rhs: Transform2) -> Transform2 {
        Transform2::compose(self, rhs)
    }
}

impl Mul<V2> for Transform2 {
    type Output = V2;

    fn mul(self, rhs: V2) -> V2 {
        self.apply(rhs)
    }
}
